//! Financial Transaction Handler
//!
//! Validates and records new financial transactions.

use std::sync::Arc;

use crate::domain::validation::validate_description;
use crate::domain::{
    ensure_type_matches, DomainError, NewFinancialTransaction, OperationContext,
    TransactionAmount,
};
use crate::error::{AppError, AppResult};
use crate::mapper::{FinancialTransactionDto, TransactionMapper};
use crate::state::AppState;
use crate::store::{CategoryRepository, StoreError, TransactionRepository, WalletRepository};

use super::CreateFinancialTransactionCommand;

// =========================================================================
// CreateFinancialTransactionHandler
// =========================================================================

/// Handler for financial transaction creation
pub struct CreateFinancialTransactionHandler {
    wallets: Arc<dyn WalletRepository>,
    categories: Arc<dyn CategoryRepository>,
    transactions: Arc<dyn TransactionRepository>,
    mapper: Arc<dyn TransactionMapper>,
}

impl CreateFinancialTransactionHandler {
    pub fn new(
        wallets: Arc<dyn WalletRepository>,
        categories: Arc<dyn CategoryRepository>,
        transactions: Arc<dyn TransactionRepository>,
        mapper: Arc<dyn TransactionMapper>,
    ) -> Self {
        Self {
            wallets,
            categories,
            transactions,
            mapper,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.wallets.clone(),
            state.categories.clone(),
            state.transactions.clone(),
            state.transaction_mapper.clone(),
        )
    }

    /// Execute the create transaction command
    ///
    /// Checks run in a fixed order (wallet, amount and description, category)
    /// and all of them finish before the single insert.
    pub async fn execute(
        &self,
        command: CreateFinancialTransactionCommand,
        context: &OperationContext,
    ) -> AppResult<FinancialTransactionDto> {
        let wallet = self
            .wallets
            .find_wallet(command.wallet_id)
            .await?
            .ok_or(AppError::WalletNotFound(command.wallet_id))?;

        let amount: TransactionAmount = command.amount.parse().map_err(DomainError::from)?;
        validate_description(&command.description)?;

        let category = match command.category_id {
            Some(category_id) => Some(
                self.categories
                    .find_category(category_id)
                    .await?
                    .ok_or(AppError::CategoryNotFound(category_id))?,
            ),
            None => None,
        };
        ensure_type_matches(command.transaction_type, category.as_ref())?;

        let transaction = self
            .transactions
            .insert_transaction(NewFinancialTransaction {
                wallet_id: wallet.id,
                amount,
                description: command.description,
                transaction_date: command.transaction_date,
                transaction_type: command.transaction_type,
                category_id: category.as_ref().map(|c| c.id),
            })
            .await
            .map_err(|e| match e {
                // Wallet or category removed between lookup and insert
                StoreError::MissingReference {
                    entity: "category",
                    id,
                } => AppError::CategoryNotFound(id),
                StoreError::MissingReference { id, .. } => AppError::WalletNotFound(id),
                other => AppError::Store(other),
            })?;

        tracing::info!(
            transaction_id = transaction.id,
            wallet_id = wallet.id,
            amount = %transaction.amount,
            transaction_type = %transaction.transaction_type,
            correlation_id = ?context.correlation_id,
            "Financial transaction created"
        );

        Ok(self.mapper.to_transaction_dto(&transaction))
    }
}
