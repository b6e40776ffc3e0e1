use std::fmt::{self, Display};

/// A central error enum for wallet-connection errors.
#[derive(Debug)]
pub enum ConnectionError {
    /// The provider refused or aborted the connection request.
    Rejected(String),
    Notification(String),
    Other(String),
}

impl Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            ConnectionError::Notification(msg) => write!(f, "Notification error: {}", msg),
            ConnectionError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectionError {}
