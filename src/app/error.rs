use std::fmt;

use crate::backend::BackendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Config(String),
    Backend(BackendError),
    /// The confirmed recovery phrase differs from the generated one, `position` is 1-based.
    PhraseMismatch { position: usize },
    InvalidPhrase(String),
    InvalidAddress(String),
    InvalidAmount(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::Backend(e) => write!(f, "{}", e.user_message()),
            Self::PhraseMismatch { position } => {
                write!(f, "Word {} does not match the recovery phrase", position)
            }
            Self::InvalidPhrase(e) => write!(f, "Invalid recovery phrase: {}", e),
            Self::InvalidAddress(e) => write!(f, "Invalid address: {}", e),
            Self::InvalidAmount(e) => write!(f, "Invalid amount: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<BackendError> for Error {
    fn from(error: BackendError) -> Self {
        Error::Backend(error)
    }
}
