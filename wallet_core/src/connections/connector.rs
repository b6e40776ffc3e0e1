use crate::connections::errors::ConnectionError;
use crate::core::provider::ProviderId;
use async_trait::async_trait;

/// A trait representing an external wallet application (browser extension,
/// mobile bridge, hardware device, ...).
///
/// `Ok(true)` means the provider accepted the connection. `Ok(false)` and any
/// `Err` are both treated as a failed attempt by the
/// [`ConnectionManager`](crate::ConnectionManager).
#[async_trait]
pub trait ExternalWalletConnector: Send + Sync {
    async fn connect_provider(&self, provider: &ProviderId) -> Result<bool, ConnectionError>;
}
