#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use wallet_core::connections::errors::ConnectionError;
use wallet_core::NotificationSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success { message: String, detail: String },
    Failure { message: String, detail: String },
}

/// Keeps every notification for assertions. With `failing()` it still records
/// but reports an error back to the manager.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub seen: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, notification: Notification) -> Result<(), ConnectionError> {
        self.seen.lock().unwrap().push(notification);
        if self.fail {
            Err(ConnectionError::Notification("toast service offline".into()))
        } else {
            Ok(())
        }
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_success(&self, message: &str, detail: &str) -> Result<(), ConnectionError> {
        self.record(Notification::Success {
            message: message.into(),
            detail: detail.into(),
        })
    }

    fn notify_failure(&self, message: &str, detail: &str) -> Result<(), ConnectionError> {
        self.record(Notification::Failure {
            message: message.into(),
            detail: detail.into(),
        })
    }
}
