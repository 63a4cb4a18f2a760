//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

use super::amount::AmountError;
use super::model::FinancialTransactionType;

/// Domain-specific errors
///
/// These errors represent business rule violations on incoming data.
/// They are independent of the web/infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount is not positive, has sub-cent precision or exceeds the limit
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// A text field failed its length/blank rules
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// Transaction type differs from the type of its category
    #[error("Transaction type {transaction_type} does not match category type {category_type}")]
    TypeMismatch {
        transaction_type: FinancialTransactionType,
        category_type: FinancialTransactionType,
    },
}

impl DomainError {
    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
