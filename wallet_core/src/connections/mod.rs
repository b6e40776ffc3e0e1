pub mod connector;
pub mod errors;
pub mod notifier;
pub mod simulated;

pub use connector::ExternalWalletConnector;
pub use notifier::{LogNotifier, NotificationSink};
pub use simulated::{SimulatedConnector, SimulatedOutcome};
