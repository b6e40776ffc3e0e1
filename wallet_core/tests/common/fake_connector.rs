//! A deterministic **in‑process stand‑in** for any type that implements
//! `wallet_core::ExternalWalletConnector`.
//!
//! *  Every `connect_provider` call is parked and handed to the test as a
//!    [`PendingCall`] through the receiver returned by [`FakeConnector::new`].
//! *  The call only resolves when the test calls [`PendingCall::resolve`], so
//!    tests control exactly how long an attempt stays `Pending`.

#![allow(dead_code)]

use async_trait::async_trait;
use wallet_core::connections::errors::ConnectionError;
use wallet_core::{ExternalWalletConnector, ProviderId};
use tokio::sync::{mpsc, oneshot};

pub struct PendingCall {
    pub provider: ProviderId,
    reply: oneshot::Sender<Result<bool, ConnectionError>>,
}

impl PendingCall {
    pub fn resolve(self, result: Result<bool, ConnectionError>) {
        // The manager side may already be gone; nothing to do then.
        let _ = self.reply.send(result);
    }

    pub fn accept(self) {
        self.resolve(Ok(true));
    }

    pub fn decline(self) {
        self.resolve(Ok(false));
    }

    pub fn fail(self, msg: &str) {
        self.resolve(Err(ConnectionError::Rejected(msg.to_string())));
    }
}

pub struct FakeConnector {
    calls_tx: mpsc::UnboundedSender<PendingCall>,
}

impl FakeConnector {
    /// Create a new fake plus the receiver on which parked calls arrive.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingCall>) {
        let (calls_tx, calls_rx) = mpsc::unbounded_channel();
        (Self { calls_tx }, calls_rx)
    }
}

#[async_trait]
impl ExternalWalletConnector for FakeConnector {
    async fn connect_provider(&self, provider: &ProviderId) -> Result<bool, ConnectionError> {
        let (reply, reply_rx) = oneshot::channel();
        self.calls_tx
            .send(PendingCall {
                provider: provider.clone(),
                reply,
            })
            .map_err(|_| ConnectionError::Other("test dropped the call receiver".into()))?;

        reply_rx
            .await
            .unwrap_or_else(|_| Err(ConnectionError::Other("test dropped the pending call".into())))
    }
}
