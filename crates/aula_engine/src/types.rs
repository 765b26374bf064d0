use thiserror::Error;

/// Tokens extracted from one text together with their count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tally {
    pub tokens: Vec<String>,
    pub count: usize,
}

impl Tally {
    pub(crate) fn from_tokens(tokens: Vec<String>) -> Self {
        let count = tokens.len();
        Self { tokens, count }
    }
}

/// The two faults a reader recovers from locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("source not found: {source_name}")]
    NotFound { source_name: String },
    #[error("failed to read {source_name}: {message}")]
    ReadFailure {
        source_name: String,
        message: String,
    },
}

impl ReadError {
    /// The line shown to the user when this error swallows a read.
    pub fn diagnostic(&self) -> String {
        match self {
            ReadError::NotFound { .. } => "The file does not exist".to_string(),
            ReadError::ReadFailure { message, .. } => {
                format!("Error reading the file: {message}")
            }
        }
    }
}
