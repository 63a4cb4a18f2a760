//! Command definitions
//!
//! Commands represent intentions to change the system state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FinancialTransactionType;

// =========================================================================
// CreateFinancialTransactionCommand
// =========================================================================

/// Command to record a new income or expense in a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFinancialTransactionCommand {
    pub wallet_id: i64,
    /// Amount as received; parsed and bounded by the handler after the
    /// wallet resolves
    pub amount: String,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: FinancialTransactionType,
    pub category_id: Option<i64>,
}

impl CreateFinancialTransactionCommand {
    pub fn new(
        wallet_id: i64,
        amount: impl ToString,
        transaction_date: DateTime<Utc>,
        transaction_type: FinancialTransactionType,
    ) -> Self {
        Self {
            wallet_id,
            amount: amount.to_string(),
            description: String::new(),
            transaction_date,
            transaction_type,
            category_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

// =========================================================================
// UpdateCategoryCommand
// =========================================================================

/// Command to rename and/or retype an existing category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub name: String,
    pub category_type: FinancialTransactionType,
}

impl UpdateCategoryCommand {
    pub fn new(name: impl Into<String>, category_type: FinancialTransactionType) -> Self {
        Self {
            name: name.into(),
            category_type,
        }
    }
}
