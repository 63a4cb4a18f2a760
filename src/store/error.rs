//! Store Errors
//!
//! Error types for storage adapters.

/// Errors that can occur in a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row referenced an entity that does not exist
    #[error("Missing {entity} {id}")]
    MissingReference { entity: &'static str, id: i64 },

    /// A stored row could not be turned back into a domain value
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Check if this error is caused by a broken foreign key
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, StoreError::MissingReference { .. })
    }
}
