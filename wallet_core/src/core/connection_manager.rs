use crate::connections::connector::ExternalWalletConnector;
use crate::connections::notifier::NotificationSink;
use crate::core::pending_slot::PendingSlot;
use crate::core::provider::{AttemptStatus, ConnectOutcome, ConnectionAttempt, ProviderId};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::broadcast;

type ConnectedCallback = Arc<dyn Fn(&ProviderId) + Send + Sync>;

/// Mediates connection attempts to external wallet providers.
///
/// 1. At most one attempt is in flight per [`PendingSlot`]. A `connect` issued
///    while the slot is taken is ignored: it neither queues nor cancels.
/// 2. Every transition (`Pending`, then `Succeeded`/`Failed`) is broadcast to
///    subscribers, and the final outcome is reported through the
///    [`NotificationSink`].
///
/// Cloning is cheap: all clones share the slot, the connector and the
/// broadcast channel.
#[derive(Clone)]
pub struct ConnectionManager {
    slot: PendingSlot,
    connector: Arc<dyn ExternalWalletConnector>,
    notifier: Arc<dyn NotificationSink>,
    on_connected: Option<ConnectedCallback>,
    events_tx: broadcast::Sender<ConnectionAttempt>,
}

impl ConnectionManager {
    pub fn new(
        slot: PendingSlot,
        connector: Arc<dyn ExternalWalletConnector>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let (events_tx, _) = broadcast::channel::<ConnectionAttempt>(64);
        Self {
            slot,
            connector,
            notifier,
            on_connected: None,
            events_tx,
        }
    }

    /// Register the callback run after a successful connection.
    pub fn with_on_connected<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ProviderId) + Send + Sync + 'static,
    {
        self.on_connected = Some(Arc::new(callback));
        self
    }

    /// Connect to `provider`; `true` only if the provider accepted.
    ///
    /// Returns `false` both on failure and when another attempt was already
    /// pending. Use [`try_connect`](Self::try_connect) to tell them apart.
    pub async fn connect(&self, provider: impl Into<ProviderId>) -> bool {
        self.try_connect(provider).await.is_succeeded()
    }

    /// Connect to `provider` and report exactly what happened.
    ///
    /// Sequencing: claim slot -> `Pending` -> await connector -> clear slot ->
    /// broadcast outcome -> notify -> success callback. Connector errors never
    /// escape; they become [`ConnectOutcome::Failed`].
    ///
    /// A panicking connector is not caught: the panic unwinds to the caller,
    /// and the slot is still released on the way out.
    pub async fn try_connect(&self, provider: impl Into<ProviderId>) -> ConnectOutcome {
        let provider = provider.into();

        // Synchronous check-and-set, before the first suspension point.
        let Some(claim) = self.slot.try_claim(&provider) else {
            info!(
                "Ignoring connect to '{}': '{}' is still connecting.",
                provider,
                self.slot.current().map(|p| p.to_string()).unwrap_or_default()
            );
            return ConnectOutcome::Ignored;
        };

        info!("Connecting to provider '{}'.", provider);
        self.publish(&provider, AttemptStatus::Pending);

        let result = self.connector.connect_provider(&provider).await;
        let status = match &result {
            Ok(true) => AttemptStatus::Succeeded,
            _ => AttemptStatus::Failed,
        };

        drop(claim);
        self.publish(&provider, status);

        match result {
            Ok(true) => {
                self.report_success(&provider);
                if let Some(callback) = &self.on_connected {
                    callback(&provider);
                }
                ConnectOutcome::Succeeded
            }
            Ok(false) => {
                self.report_failure(&provider, "provider declined the connection");
                ConnectOutcome::Failed
            }
            Err(e) => {
                self.report_failure(&provider, &e.to_string());
                ConnectOutcome::Failed
            }
        }
    }

    /// The provider holding the pending slot, if any.
    pub fn currently_connecting(&self) -> Option<ProviderId> {
        self.slot.current()
    }

    /// `Some(Pending)` while `provider` is connecting. No history is kept.
    pub fn status(&self, provider: &ProviderId) -> Option<AttemptStatus> {
        match self.slot.current() {
            Some(current) if &current == provider => Some(AttemptStatus::Pending),
            _ => None,
        }
    }

    /// Subscribe to attempt transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<ConnectionAttempt> {
        self.events_tx.subscribe()
    }

    fn publish(&self, provider: &ProviderId, status: AttemptStatus) {
        debug!("Attempt '{}' -> {:?}", provider, status);
        // No receivers is fine.
        let _ = self.events_tx.send(ConnectionAttempt {
            provider: provider.clone(),
            status,
        });
    }

    fn report_success(&self, provider: &ProviderId) {
        let message = format!("Connected to {}", provider);
        if let Err(e) = self
            .notifier
            .notify_success(&message, "wallet connection established")
        {
            warn!("Success notification for '{}' failed: {}", provider, e);
        }
    }

    fn report_failure(&self, provider: &ProviderId, detail: &str) {
        let message = format!("Failed to connect to {}", provider);
        if let Err(e) = self.notifier.notify_failure(&message, detail) {
            warn!("Failure notification for '{}' failed: {}", provider, e);
        }
    }
}
