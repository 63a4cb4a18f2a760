//! Entity to representation mapping
//!
//! The workflows hand entities to a mapper instead of building response
//! shapes themselves, so tests can substitute their own mapping.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{FinancialTransaction, FinancialTransactionCategory, FinancialTransactionType};

/// Representation of a stored financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTransactionDto {
    pub id: i64,
    pub wallet_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: FinancialTransactionType,
    pub category_id: Option<i64>,
}

/// Representation of a financial transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTransactionCategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: FinancialTransactionType,
}

pub trait TransactionMapper: Send + Sync {
    fn to_transaction_dto(&self, transaction: &FinancialTransaction) -> FinancialTransactionDto;
}

pub trait CategoryMapper: Send + Sync {
    fn to_category_dto(&self, category: &FinancialTransactionCategory)
        -> FinancialTransactionCategoryDto;
}

/// Field-by-field mapping used by the running service
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelMapper;

impl TransactionMapper for ModelMapper {
    fn to_transaction_dto(&self, transaction: &FinancialTransaction) -> FinancialTransactionDto {
        FinancialTransactionDto {
            id: transaction.id,
            wallet_id: transaction.wallet_id,
            amount: transaction.amount,
            description: transaction.description.clone(),
            transaction_date: transaction.transaction_date,
            transaction_type: transaction.transaction_type,
            category_id: transaction.category_id,
        }
    }
}

impl CategoryMapper for ModelMapper {
    fn to_category_dto(
        &self,
        category: &FinancialTransactionCategory,
    ) -> FinancialTransactionCategoryDto {
        FinancialTransactionCategoryDto {
            id: category.id,
            name: category.name.clone(),
            category_type: category.category_type,
        }
    }
}
