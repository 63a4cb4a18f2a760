//! Track Expenses Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod error_code;
pub mod handlers;
pub mod mapper;
pub mod state;
pub mod store;

pub use config::Config;
pub use domain::{DomainError, FinancialTransactionType, OperationContext, TransactionAmount};
pub use error::{AppError, AppResult, ErrorResponse};
pub use error_code::ErrorCode;
pub use state::AppState;
