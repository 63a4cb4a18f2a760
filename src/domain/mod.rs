//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod context;
pub mod error;
pub mod model;
pub mod validation;

pub use amount::{AmountError, TransactionAmount, MAX_TRANSACTION_AMOUNT};
pub use context::OperationContext;
pub use error::DomainError;
pub use model::{
    FinancialTransaction, FinancialTransactionCategory, FinancialTransactionType,
    NewFinancialTransaction, NewFinancialTransactionCategory, UnknownTransactionType, Wallet,
};
pub use validation::ensure_type_matches;
