//! In-memory store
//!
//! Keeps every table in a single `RwLock`, so each call sees and produces a
//! consistent snapshot. Identifiers start at 1 like a fresh `BIGSERIAL`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{CategoryRepository, StoreError, TransactionRepository, WalletRepository};
use crate::domain::{
    FinancialTransaction, FinancialTransactionCategory, NewFinancialTransaction,
    NewFinancialTransactionCategory, Wallet,
};

#[derive(Debug, Default)]
struct Tables {
    wallets: BTreeMap<i64, Wallet>,
    categories: BTreeMap<i64, FinancialTransactionCategory>,
    transactions: BTreeMap<i64, FinancialTransaction>,
    last_wallet_id: i64,
    last_category_id: i64,
    last_transaction_id: i64,
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletRepository for InMemoryStore {
    async fn find_wallet(&self, id: i64) -> Result<Option<Wallet>, StoreError> {
        Ok(self.tables.read().await.wallets.get(&id).cloned())
    }

    async fn insert_wallet(&self, name: &str) -> Result<Wallet, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_wallet_id += 1;

        let wallet = Wallet {
            id: tables.last_wallet_id,
            name: name.to_string(),
            creation_date: Utc::now(),
        };
        tables.wallets.insert(wallet.id, wallet.clone());

        Ok(wallet)
    }

    async fn count_wallets(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.wallets.len() as i64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_category(
        &self,
        id: i64,
    ) -> Result<Option<FinancialTransactionCategory>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert_category(
        &self,
        category: NewFinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;

        let category = FinancialTransactionCategory {
            id: tables.last_category_id,
            name: category.name,
            category_type: category.category_type,
            creation_date: Utc::now(),
        };
        tables.categories.insert(category.id, category.clone());

        Ok(category)
    }

    async fn save_category(
        &self,
        category: &FinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .categories
            .get_mut(&category.id)
            .ok_or(StoreError::MissingReference {
                entity: "category",
                id: category.id,
            })?;

        // creation_date is owned by the store
        stored.name = category.name.clone();
        stored.category_type = category.category_type;

        Ok(stored.clone())
    }

    async fn count_categories(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.categories.len() as i64)
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn find_transaction(&self, id: i64) -> Result<Option<FinancialTransaction>, StoreError> {
        Ok(self.tables.read().await.transactions.get(&id).cloned())
    }

    async fn insert_transaction(
        &self,
        transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction, StoreError> {
        let mut tables = self.tables.write().await;

        if !tables.wallets.contains_key(&transaction.wallet_id) {
            return Err(StoreError::MissingReference {
                entity: "wallet",
                id: transaction.wallet_id,
            });
        }
        if let Some(category_id) = transaction.category_id {
            if !tables.categories.contains_key(&category_id) {
                return Err(StoreError::MissingReference {
                    entity: "category",
                    id: category_id,
                });
            }
        }

        tables.last_transaction_id += 1;
        let stored = FinancialTransaction {
            id: tables.last_transaction_id,
            wallet_id: transaction.wallet_id,
            amount: transaction.amount.value(),
            description: transaction.description,
            transaction_date: transaction.transaction_date,
            transaction_type: transaction.transaction_type,
            category_id: transaction.category_id,
            creation_date: Utc::now(),
        };
        tables.transactions.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn count_transactions(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.transactions.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinancialTransactionType, TransactionAmount};
    use rust_decimal::Decimal;

    fn new_transaction(wallet_id: i64, category_id: Option<i64>) -> NewFinancialTransaction {
        NewFinancialTransaction {
            wallet_id,
            amount: TransactionAmount::new(Decimal::new(1999, 2)).unwrap(),
            description: "Lunch".to_string(),
            transaction_date: Utc::now(),
            transaction_type: FinancialTransactionType::Expense,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let store = InMemoryStore::new();

        let first = store.insert_wallet("Main").await.unwrap();
        let second = store.insert_wallet("Savings").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count_wallets().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_transaction_requires_wallet() {
        let store = InMemoryStore::new();

        let result = store.insert_transaction(new_transaction(42, None)).await;

        assert!(matches!(
            result,
            Err(StoreError::MissingReference { entity: "wallet", id: 42 })
        ));
        assert_eq!(store.count_transactions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_transaction_requires_category() {
        let store = InMemoryStore::new();
        let wallet = store.insert_wallet("Main").await.unwrap();

        let result = store.insert_transaction(new_transaction(wallet.id, Some(7))).await;

        assert!(result.unwrap_err().is_missing_reference());
        assert_eq!(store.count_transactions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_category_keeps_creation_date() {
        let store = InMemoryStore::new();
        let category = store
            .insert_category(NewFinancialTransactionCategory {
                name: "Food".to_string(),
                category_type: FinancialTransactionType::Expense,
            })
            .await
            .unwrap();

        let mut changed = category.clone();
        changed.name = "Salary".to_string();
        changed.category_type = FinancialTransactionType::Income;
        changed.creation_date = Utc::now() + chrono::Duration::days(1);

        let saved = store.save_category(&changed).await.unwrap();

        assert_eq!(saved.name, "Salary");
        assert_eq!(saved.category_type, FinancialTransactionType::Income);
        assert_eq!(saved.creation_date, category.creation_date);
    }
}
