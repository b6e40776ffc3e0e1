use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Stable key for a wallet provider ("MetaMask", "Phantom", ...).
///
/// An open string set: new providers need no change to the
/// manager. Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptStatus {
    Pending,
    Succeeded,
    Failed,
}

/// One state transition of a connection attempt, as broadcast to listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionAttempt {
    pub provider: ProviderId,
    pub status: AttemptStatus,
}

/// Result of [`ConnectionManager::try_connect`](crate::ConnectionManager::try_connect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Succeeded,
    Failed,
    /// Another attempt was already pending; nothing happened.
    Ignored,
}

impl ConnectOutcome {
    pub fn is_succeeded(self) -> bool {
        matches!(self, ConnectOutcome::Succeeded)
    }
}
