//! Pre-submission checks for outbound transfers.
//!
//! Amounts and balances arrive as decimal strings and are compared as `f64`.
//! That loses precision for very large or very long amounts; callers needing
//! exact arithmetic must check again with a decimal type before signing.

use std::fmt::{self, Display};

/// Why a transfer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingRecipient,
    InvalidAmount,
    InsufficientBalance,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRecipient => write!(f, "Please enter a recipient address"),
            ValidationError::InvalidAmount => write!(f, "Please enter a valid amount"),
            ValidationError::InsufficientBalance => write!(f, "Insufficient balance"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// A proposed transfer, built per submission and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient_address: String,
    pub amount: String,
    pub available_balance: String,
}

impl TransferRequest {
    pub fn validate(&self) -> ValidationResult {
        validate(&self.recipient_address, &self.amount, &self.available_balance)
    }
}

/// Check a transfer. Rules run in order and the first failure wins:
/// recipient, then amount, then balance.
pub fn validate(recipient_address: &str, amount: &str, available_balance: &str) -> ValidationResult {
    if recipient_address.trim().is_empty() {
        return ValidationResult::Invalid(ValidationError::MissingRecipient);
    }

    let amount = match parse_decimal(amount) {
        Some(value) if value > 0.0 => value,
        _ => return ValidationResult::Invalid(ValidationError::InvalidAmount),
    };

    // An unreadable balance counts as nothing available.
    let balance = parse_decimal(available_balance).unwrap_or(0.0);
    if amount > balance {
        return ValidationResult::Invalid(ValidationError::InsufficientBalance);
    }

    ValidationResult::Valid
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
