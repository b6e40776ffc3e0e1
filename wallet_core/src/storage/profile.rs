use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// A wallet provider the panel offers to connect to.
///
/// JSON looks like:
/// `{ "id":"Phantom", "name":"Phantom Wallet", "website":"https://phantom.app" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: ProviderId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ProviderProfile {
    pub fn new(id: impl Into<ProviderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            website: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Providers offered when nothing has been configured yet.
    pub fn defaults() -> Vec<ProviderProfile> {
        vec![
            ProviderProfile::new("MetaMask", "MetaMask").with_website("https://metamask.io"),
            ProviderProfile::new("Phantom", "Phantom Wallet").with_website("https://phantom.app"),
            ProviderProfile::new("CoinbaseWallet", "Coinbase Wallet")
                .with_website("https://www.coinbase.com/wallet"),
            ProviderProfile::new("WalletConnect", "WalletConnect")
                .with_website("https://walletconnect.com"),
        ]
    }
}
