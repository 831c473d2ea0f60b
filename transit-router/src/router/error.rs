//! Router build errors.

/// Errors that abort building a router from a network.
///
/// These all mean the network or settings are inconsistent; a build that
/// hits one produces nothing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A bus route names a stop the network can't resolve
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStop { bus: String, stop: String },

    /// The network lists two stops with the same name
    #[error("stop {0} is listed more than once")]
    DuplicateStop(String),

    /// Routing settings that can't produce valid edge weights
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BuildError::UnknownStop {
            bus: "14".into(),
            stop: "Ghost".into(),
        };
        assert_eq!(err.to_string(), "bus 14 references unknown stop Ghost");

        let err = BuildError::DuplicateStop("A".into());
        assert_eq!(err.to_string(), "stop A is listed more than once");

        let err = BuildError::InvalidSettings("bad velocity".into());
        assert_eq!(err.to_string(), "invalid routing settings: bad velocity");
    }
}
