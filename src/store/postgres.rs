//! PostgreSQL store
//!
//! Tables are created by `migrations/0001_init.sql`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{CategoryRepository, StoreError, TransactionRepository, WalletRepository};
use crate::domain::{
    FinancialTransaction, FinancialTransactionCategory, FinancialTransactionType,
    NewFinancialTransaction, NewFinancialTransactionCategory, Wallet,
};

/// Foreign key violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

type CategoryRow = (i64, String, String, DateTime<Utc>);

type TransactionRow = (
    i64,
    i64,
    Decimal,
    String,
    DateTime<Utc>,
    String,
    Option<i64>,
    DateTime<Utc>,
);

/// Store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_type(value: &str) -> Result<FinancialTransactionType, StoreError> {
    value
        .parse()
        .map_err(|e: crate::domain::UnknownTransactionType| StoreError::InvalidData(e.to_string()))
}

fn category_from_row(row: CategoryRow) -> Result<FinancialTransactionCategory, StoreError> {
    let (id, name, category_type, creation_date) = row;
    Ok(FinancialTransactionCategory {
        id,
        name,
        category_type: parse_type(&category_type)?,
        creation_date,
    })
}

fn transaction_from_row(row: TransactionRow) -> Result<FinancialTransaction, StoreError> {
    let (id, wallet_id, amount, description, transaction_date, transaction_type, category_id, creation_date) =
        row;
    Ok(FinancialTransaction {
        id,
        wallet_id,
        amount,
        description,
        transaction_date,
        transaction_type: parse_type(&transaction_type)?,
        category_id,
        creation_date,
    })
}

/// Turn a foreign key violation on insert into the entity that was missing
fn map_insert_error(error: sqlx::Error, transaction: &NewFinancialTransaction) -> StoreError {
    if let sqlx::Error::Database(ref db_error) = error {
        if db_error.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return match db_error.constraint() {
                Some("financial_transactions_category_id_fkey") => StoreError::MissingReference {
                    entity: "category",
                    id: transaction.category_id.unwrap_or_default(),
                },
                _ => StoreError::MissingReference {
                    entity: "wallet",
                    id: transaction.wallet_id,
                },
            };
        }
    }

    StoreError::Database(error)
}

#[async_trait]
impl WalletRepository for PgStore {
    async fn find_wallet(&self, id: i64) -> Result<Option<Wallet>, StoreError> {
        let row: Option<(i64, String, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, name, creation_date FROM wallets WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, name, creation_date)| Wallet {
            id,
            name,
            creation_date,
        }))
    }

    async fn insert_wallet(&self, name: &str) -> Result<Wallet, StoreError> {
        let (id, name, creation_date): (i64, String, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO wallets (name, creation_date)
            VALUES ($1, NOW())
            RETURNING id, name, creation_date
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(Wallet {
            id,
            name,
            creation_date,
        })
    }

    async fn count_wallets(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wallets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl CategoryRepository for PgStore {
    async fn find_category(
        &self,
        id: i64,
    ) -> Result<Option<FinancialTransactionCategory>, StoreError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, type, creation_date
            FROM financial_transaction_categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(category_from_row).transpose()
    }

    async fn insert_category(
        &self,
        category: NewFinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError> {
        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO financial_transaction_categories (name, type, creation_date)
            VALUES ($1, $2, NOW())
            RETURNING id, name, type, creation_date
            "#,
        )
        .bind(&category.name)
        .bind(category.category_type.as_str())
        .fetch_one(&self.pool)
        .await?;

        category_from_row(row)
    }

    async fn save_category(
        &self,
        category: &FinancialTransactionCategory,
    ) -> Result<FinancialTransactionCategory, StoreError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            UPDATE financial_transaction_categories
            SET name = $2, type = $3
            WHERE id = $1
            RETURNING id, name, type, creation_date
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.category_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(StoreError::MissingReference {
            entity: "category",
            id: category.id,
        })?;

        category_from_row(row)
    }

    async fn count_categories(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM financial_transaction_categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl TransactionRepository for PgStore {
    async fn find_transaction(&self, id: i64) -> Result<Option<FinancialTransaction>, StoreError> {
        let row: Option<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, wallet_id, amount, description, transaction_date, type, category_id, creation_date
            FROM financial_transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(transaction_from_row).transpose()
    }

    async fn insert_transaction(
        &self,
        transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction, StoreError> {
        // Single statement, so it commits or fails as a whole
        let row: TransactionRow = sqlx::query_as(
            r#"
            INSERT INTO financial_transactions
                (wallet_id, amount, description, transaction_date, type, category_id, creation_date)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, wallet_id, amount, description, transaction_date, type, category_id, creation_date
            "#,
        )
        .bind(transaction.wallet_id)
        .bind(transaction.amount.value())
        .bind(&transaction.description)
        .bind(transaction.transaction_date)
        .bind(transaction.transaction_type.as_str())
        .bind(transaction.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &transaction))?;

        transaction_from_row(row)
    }

    async fn count_transactions(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM financial_transactions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
