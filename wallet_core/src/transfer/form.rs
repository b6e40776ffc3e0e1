use crate::transfer::validator::{validate, ValidationResult};
use crate::transfer::SendCallback;
use log::{debug, info};

/// Recipient and amount inputs of the send panel.
///
/// Inputs survive a failed validation so the user can correct them, and are
/// cleared once a transfer was handed to the sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl TransferForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient = recipient.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn is_empty(&self) -> bool {
        self.recipient.is_empty() && self.amount.is_empty()
    }

    pub fn reset(&mut self) {
        self.recipient.clear();
        self.amount.clear();
    }

    /// Validate against `available_balance` and dispatch on success.
    pub fn submit<S>(&mut self, available_balance: &str, sender: &S) -> ValidationResult
    where
        S: SendCallback + ?Sized,
    {
        let result = validate(&self.recipient, &self.amount, available_balance);
        match result {
            ValidationResult::Valid => {
                info!("Dispatching transfer of {} to {}", self.amount, self.recipient);
                sender.send(&self.recipient, &self.amount);
                self.reset();
            }
            ValidationResult::Invalid(reason) => {
                debug!("Transfer rejected: {:?}", reason);
            }
        }
        result
    }
}
