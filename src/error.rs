//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Every error is
//! rendered through the business error catalog.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error_code::ErrorCode;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Wallet not found: {0}")]
    WalletNotFound(i64),

    #[error("Financial transaction not found: {0}")]
    TransactionNotFound(i64),

    #[error("Financial transaction category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

impl AppError {
    /// The catalog entry this error is reported as
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::WalletNotFound(_) => ErrorCode::W003,
            AppError::TransactionNotFound(_) => ErrorCode::FT001,
            AppError::CategoryNotFound(_) => ErrorCode::FTC001,
            AppError::InvalidRequest(_) => ErrorCode::TEA002,
            AppError::Domain(DomainError::TypeMismatch { .. }) => ErrorCode::FT002,
            AppError::Domain(DomainError::InvalidAmount(_))
            | AppError::Domain(DomainError::InvalidField { .. }) => ErrorCode::TEA003,
            AppError::Store(_) => ErrorCode::TEA001,
        }
    }

    pub fn business_status_code(&self) -> u16 {
        self.error_code().business_status_code()
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub status_code: u16,
}

impl From<ErrorCode> for ErrorResponse {
    fn from(code: ErrorCode) -> Self {
        Self {
            status: code.business_status().to_string(),
            message: code.business_message().to_string(),
            status_code: code.business_status_code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        // 500 Internal Server Error
        if code == ErrorCode::TEA001 {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = %code, "Request rejected");
        }

        (code.http_status(), Json(ErrorResponse::from(code))).into_response()
    }
}
