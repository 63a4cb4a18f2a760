//! Store module
//!
//! Storage ports used by the workflows, with a PostgreSQL adapter for the
//! running service and an in-memory adapter for tests and local demos.

mod error;
mod memory;
mod postgres;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::domain::{
    FinancialTransaction, FinancialTransactionCategory, NewFinancialTransaction,
    NewFinancialTransactionCategory, Wallet,
};

#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn find_wallet(&self, id: i64) -> Result<Option<Wallet>, StoreError>;

    async fn insert_wallet(&self, name: &str) -> Result<Wallet, StoreError>;

    async fn count_wallets(&self) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_category(
        &self,
        id: i64,
    ) -> Result<Option<FinancialTransactionCategory>, StoreError>;

    async fn insert_category(
        &self,
        category: NewFinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError>;

    /// Persist the mutable fields (name, type) of an existing category and
    /// return the stored row.
    async fn save_category(
        &self,
        category: &FinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError>;

    async fn count_categories(&self) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn find_transaction(&self, id: i64) -> Result<Option<FinancialTransaction>, StoreError>;

    async fn insert_transaction(
        &self,
        transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction, StoreError>;

    async fn count_transactions(&self) -> Result<i64, StoreError>;
}
