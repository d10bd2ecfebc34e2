use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid dice configuration: {0}")]
    Configuration(String),

    #[error("Invalid startup input: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InputFormat(String),

    #[error("Dice index {index} out of range, {remaining} dice remaining")]
    IndexOutOfRange { index: usize, remaining: usize },

    #[error("Commitment verification failed for {round}")]
    IntegrityFault { round: String },

    #[error("Commitment range must be greater than 0")]
    InvalidRange,

    #[error("Invalid MAC key length")]
    InvalidKey,

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn input_format(msg: impl Into<String>) -> Self {
        Self::InputFormat(msg.into())
    }

    pub fn integrity(round: impl Into<String>) -> Self {
        Self::IntegrityFault {
            round: round.into(),
        }
    }

    /// Errors the session recovers from by prompting again in the same phase.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InputFormat(_) | GameError::IndexOutOfRange { .. }
        )
    }
}
