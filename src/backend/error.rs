//! Error type of every failed gateway call.

use std::fmt;

use super::command::CommandName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    BackendUnavailable,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested resource (usually a wallet) does not exist.
    NotFound(CommandName, String),
    /// The backend rejected the arguments of the command.
    ValidationFailed(CommandName, String),
    /// The backend could not be reached or is not ready.
    BackendUnavailable(CommandName, String),
    Unknown(CommandName, String),
}

impl BackendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(..) => ErrorKind::NotFound,
            Self::ValidationFailed(..) => ErrorKind::ValidationFailed,
            Self::BackendUnavailable(..) => ErrorKind::BackendUnavailable,
            Self::Unknown(..) => ErrorKind::Unknown,
        }
    }

    pub fn command(&self) -> CommandName {
        match self {
            Self::NotFound(cmd, _)
            | Self::ValidationFailed(cmd, _)
            | Self::BackendUnavailable(cmd, _)
            | Self::Unknown(cmd, _) => *cmd,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(_, msg)
            | Self::ValidationFailed(_, msg)
            | Self::BackendUnavailable(_, msg)
            | Self::Unknown(_, msg) => msg,
        }
    }

    /// Text meant for the user rather than for the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(CommandName::WalletInfo | CommandName::ListTxs, _) => {
                "This wallet is not known by the node.".to_string()
            }
            Self::NotFound(..) => "The node does not know the requested item.".to_string(),
            Self::ValidationFailed(CommandName::Send, msg) => {
                format!("The node refused the payment: {}", msg)
            }
            Self::ValidationFailed(CommandName::LoadWalletWithMmc, _) => {
                "The node refused the recovery phrase.".to_string()
            }
            Self::ValidationFailed(_, msg) => format!("The node refused the request: {}", msg),
            Self::BackendUnavailable(..) => {
                "The node is unreachable. Please check that it is running and try again."
                    .to_string()
            }
            Self::Unknown(_, msg) => format!("Something went wrong: {}", msg),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(cmd, msg) => write!(f, "{}: not found: {}", cmd, msg),
            Self::ValidationFailed(cmd, msg) => write!(f, "{}: validation failed: {}", cmd, msg),
            Self::BackendUnavailable(cmd, msg) => {
                write!(f, "{}: backend unavailable: {}", cmd, msg)
            }
            Self::Unknown(cmd, msg) => write!(f, "{}: {}", cmd, msg),
        }
    }
}

impl std::error::Error for BackendError {}
