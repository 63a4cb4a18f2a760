//! Category Handler
//!
//! Handles updates of existing financial transaction categories.

use std::sync::Arc;

use crate::domain::validation::validate_category_name;
use crate::domain::OperationContext;
use crate::error::{AppError, AppResult};
use crate::mapper::{CategoryMapper, FinancialTransactionCategoryDto};
use crate::state::AppState;
use crate::store::{CategoryRepository, StoreError};

use super::UpdateCategoryCommand;

// =========================================================================
// UpdateCategoryHandler
// =========================================================================

/// Handler for category updates
pub struct UpdateCategoryHandler {
    categories: Arc<dyn CategoryRepository>,
    mapper: Arc<dyn CategoryMapper>,
}

impl UpdateCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>, mapper: Arc<dyn CategoryMapper>) -> Self {
        Self { categories, mapper }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.categories.clone(), state.category_mapper.clone())
    }

    /// Execute the update category command
    pub async fn execute(
        &self,
        category_id: i64,
        command: UpdateCategoryCommand,
        context: &OperationContext,
    ) -> AppResult<FinancialTransactionCategoryDto> {
        let mut category = self
            .categories
            .find_category(category_id)
            .await?
            .ok_or(AppError::CategoryNotFound(category_id))?;

        category.name = validate_category_name(&command.name)?;
        category.category_type = command.category_type;

        let saved = self
            .categories
            .save_category(&category)
            .await
            .map_err(|e| match e {
                StoreError::MissingReference { id, .. } => AppError::CategoryNotFound(id),
                other => AppError::Store(other),
            })?;

        tracing::info!(
            category_id = saved.id,
            category_type = %saved.category_type,
            correlation_id = ?context.correlation_id,
            "Financial transaction category updated"
        );

        Ok(self.mapper.to_category_dto(&saved))
    }
}
