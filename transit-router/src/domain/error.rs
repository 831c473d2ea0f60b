//! Network loading errors.
//!
//! These errors describe an inconsistent network description. They are
//! raised while a catalogue is being filled, before any graph is built.

/// Errors raised while loading stops, buses and distances into a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A stop with this name was already added
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name was already added
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A road distance names a stop the catalogue doesn't know
    #[error("road distance from {from} to {to} references an unknown stop")]
    UnknownDistanceStop { from: String, to: String },
}
