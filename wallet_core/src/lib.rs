pub mod connections;
pub mod core;
pub mod display;
#[cfg(feature = "storage")]
pub mod storage;
pub mod transfer;
pub mod utils;

// re‑export ergonomic entry points
pub use connections::{ExternalWalletConnector, LogNotifier, NotificationSink, SimulatedConnector};
pub use crate::core::connection_manager::ConnectionManager;
pub use crate::core::pending_slot::PendingSlot;
pub use crate::core::provider::{AttemptStatus, ConnectOutcome, ConnectionAttempt, ProviderId};
pub use display::{display_address, mask};
#[cfg(feature = "storage")]
pub use storage::{profile::ProviderProfile, store::ProviderStore};
pub use transfer::{
    form::TransferForm,
    validator::{validate, TransferRequest, ValidationError, ValidationResult},
    SendCallback,
};
