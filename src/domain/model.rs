//! Domain entities
//!
//! Wallets, financial transaction categories and financial transactions as
//! they are stored, independent of any request or response shape.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::TransactionAmount;

/// Direction of a financial transaction, shared by categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FinancialTransactionType {
    Income,
    Expense,
}

impl FinancialTransactionType {
    /// Storage representation (`INCOME` / `EXPENSE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for FinancialTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown financial transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for FinancialTransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// A named container that owns financial transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: i64,
    pub name: String,
    pub creation_date: DateTime<Utc>,
}

/// A named, typed classification for transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialTransactionCategory {
    pub id: i64,
    pub name: String,
    pub category_type: FinancialTransactionType,
    pub creation_date: DateTime<Utc>,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFinancialTransactionCategory {
    pub name: String,
    pub category_type: FinancialTransactionType,
}

/// A single income or expense record tied to a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialTransaction {
    pub id: i64,
    pub wallet_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: FinancialTransactionType,
    pub category_id: Option<i64>,
    pub creation_date: DateTime<Utc>,
}

/// A fully validated transaction ready to be inserted.
///
/// Only the creation workflow builds these, after the wallet and category
/// have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFinancialTransaction {
    pub wallet_id: i64,
    pub amount: TransactionAmount,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: FinancialTransactionType,
    pub category_id: Option<i64>,
}
