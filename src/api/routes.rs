//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{FinancialTransactionType, OperationContext};
use crate::error::{AppError, AppResult};
use crate::handlers::{
    CreateFinancialTransactionCommand, CreateFinancialTransactionHandler, UpdateCategoryCommand,
    UpdateCategoryHandler,
};
use crate::mapper::{FinancialTransactionCategoryDto, FinancialTransactionDto};
use crate::state::AppState;

// =========================================================================
// Request types
// =========================================================================

/// Amount exactly as sent, either a JSON string or a JSON number.
///
/// Kept unparsed so that out-of-range values reach the workflow and are
/// reported after the wallet check instead of failing body extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Text(text) => f.write_str(text),
            RawAmount::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinancialTransactionRequest {
    pub wallet_id: i64,
    pub amount: RawAmount,
    #[serde(default)]
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: FinancialTransactionType,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl From<CreateFinancialTransactionRequest> for CreateFinancialTransactionCommand {
    fn from(request: CreateFinancialTransactionRequest) -> Self {
        let command = CreateFinancialTransactionCommand::new(
            request.wallet_id,
            request.amount,
            request.transaction_date,
            request.transaction_type,
        )
        .with_description(request.description);

        match request.category_id {
            Some(category_id) => command.with_category(category_id),
            None => command,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: FinancialTransactionType,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/transactions", post(create_transaction))
        .route("/api/transactions/:transaction_id", get(get_transaction))
        .route("/api/categories/:category_id", patch(update_category))
}

/// Body rejections are reported through the error catalog like every other
/// failure.
fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))
}

// =========================================================================
// POST /api/transactions
// =========================================================================

/// Record a new financial transaction
async fn create_transaction(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<CreateFinancialTransactionRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<FinancialTransactionDto>)> {
    let request = read_body(payload)?;
    let context = context.map(|Extension(c)| c).unwrap_or_default();

    let handler = CreateFinancialTransactionHandler::from_state(&state);
    let result = handler.execute(request.into(), &context).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

// =========================================================================
// GET /api/transactions/:transaction_id
// =========================================================================

/// Get a financial transaction by ID
async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> AppResult<Json<FinancialTransactionDto>> {
    let transaction = state
        .transactions
        .find_transaction(transaction_id)
        .await?
        .ok_or(AppError::TransactionNotFound(transaction_id))?;

    Ok(Json(state.transaction_mapper.to_transaction_dto(&transaction)))
}

// =========================================================================
// PATCH /api/categories/:category_id
// =========================================================================

/// Rename and/or retype a category
async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> AppResult<Json<FinancialTransactionCategoryDto>> {
    let request = read_body(payload)?;
    let context = context.map(|Extension(c)| c).unwrap_or_default();

    let handler = UpdateCategoryHandler::from_state(&state);
    let command = UpdateCategoryCommand::new(request.name, request.category_type);
    let result = handler.execute(category_id, command, &context).await?;

    Ok(Json(result))
}
