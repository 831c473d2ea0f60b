//! Persistence error types.

/// Errors that can occur when saving or loading a router.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a valid record
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A required block is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The record decodes but doesn't describe a valid router
    #[error("inconsistent record: {0}")]
    Inconsistent(String),
}
