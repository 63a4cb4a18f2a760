//! Command Handlers module
//!
//! Handlers that orchestrate business operations.
//! Each handler resolves entities through the store ports, applies the
//! domain rules and hands the result to a mapper.

mod category_handler;
mod commands;
mod transaction_handler;


pub use category_handler::UpdateCategoryHandler;
pub use commands::*;
pub use transaction_handler::CreateFinancialTransactionHandler;
