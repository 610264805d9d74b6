use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Invalid ball: {0}")]
    InvalidBall(String),

    #[error("Invalid match setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid player name: {0}")]
    InvalidName(String),

    #[error("Innings complete: match has already been completed")]
    InningsComplete,

    #[error("Nothing to undo: no balls recorded in this match")]
    NothingToUndo,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },
}

impl ScoreError {
    /// Whether the caller can retry after fixing its own state.
    ///
    /// `NothingToUndo` is a logical precondition failure and safe to surface
    /// as a no-op; `InningsComplete` means the same input must not be
    /// retried; malformed input is never recoverable as-is.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScoreError::NothingToUndo => true,
            ScoreError::InningsComplete => false,
            ScoreError::InvalidBall(_) => false,
            ScoreError::InvalidSetup(_) => false,
            ScoreError::InvalidName(_) => false,
            ScoreError::Serialization(_) => false,
            ScoreError::Deserialization(_) => false,
            ScoreError::SchemaVersionMismatch { .. } => false,
        }
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ScoreError::Deserialization(err.to_string())
        } else {
            ScoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
