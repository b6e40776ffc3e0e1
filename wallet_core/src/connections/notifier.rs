use crate::connections::errors::ConnectionError;
use log::{error, info};

/// Surfaces connection outcomes to the user (toast, status line, log ...).
///
/// Errors returned here are logged by the caller and otherwise ignored.
pub trait NotificationSink: Send + Sync {
    fn notify_success(&self, message: &str, detail: &str) -> Result<(), ConnectionError>;
    fn notify_failure(&self, message: &str, detail: &str) -> Result<(), ConnectionError>;
}

/// Writes notifications through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify_success(&self, message: &str, detail: &str) -> Result<(), ConnectionError> {
        info!("{}: {}", message, detail);
        Ok(())
    }

    fn notify_failure(&self, message: &str, detail: &str) -> Result<(), ConnectionError> {
        error!("{}: {}", message, detail);
        Ok(())
    }
}
