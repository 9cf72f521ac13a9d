use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoseError {
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("null pointer passed for {what}")]
    NullPointer { what: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PoseError {
    pub fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        PoseError::InvalidLength {
            what,
            expected,
            actual,
        }
    }

    pub fn is_invalid_length(&self) -> bool {
        matches!(self, PoseError::InvalidLength { .. })
    }
}

pub fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), PoseError> {
    if actual == expected {
        Ok(())
    } else {
        Err(PoseError::invalid_length(what, expected, actual))
    }
}
