use thiserror::Error;

/// The ways an operation on a game can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid input '{input}': {reason}")]
    InvalidInputFormat { input: String, reason: String },

    #[error("{player} cannot play '{mv}': {reason}")]
    IllegalMove { player: String, mv: String, reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("internal invariant violated: {reason}")]
    InternalInvariantViolation { reason: String },
}

impl GameError {
    /// Input and rule errors are answered by asking for another move; the rest are defects.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidInputFormat { .. } | GameError::IllegalMove { .. })
    }

    /// Classifies an arbitrary error, if it came from a game operation.
    pub fn classify(err: &anyhow::Error) -> Option<&GameError> {
        err.downcast_ref::<GameError>()
    }
}
