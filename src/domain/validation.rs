//! Stateless validation rules
//!
//! Cross-field and per-field checks that run before anything touches the
//! store. None of these functions perform I/O.

use super::error::DomainError;
use super::model::{FinancialTransactionCategory, FinancialTransactionType};

/// Maximum length of a transaction description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Maximum length of a category name, in characters
pub const MAX_CATEGORY_NAME_LENGTH: usize = 30;

/// Check that a transaction's type agrees with its category, if any.
///
/// A transaction without a category is always consistent.
pub fn ensure_type_matches(
    transaction_type: FinancialTransactionType,
    category: Option<&FinancialTransactionCategory>,
) -> Result<(), DomainError> {
    match category {
        Some(category) if category.category_type != transaction_type => {
            Err(DomainError::TypeMismatch {
                transaction_type,
                category_type: category.category_type,
            })
        }
        _ => Ok(()),
    }
}

pub fn validate_description(description: &str) -> Result<(), DomainError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::invalid_field(
            "description",
            format!("at most {MAX_DESCRIPTION_LENGTH} characters allowed (got {length})"),
        ));
    }

    Ok(())
}

/// Category names must be non-blank and short enough for list views.
///
/// Returns the trimmed name that should be stored.
pub fn validate_category_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_field("name", "must not be blank"));
    }

    let length = trimmed.chars().count();
    if length > MAX_CATEGORY_NAME_LENGTH {
        return Err(DomainError::invalid_field(
            "name",
            format!("at most {MAX_CATEGORY_NAME_LENGTH} characters allowed (got {length})"),
        ));
    }

    Ok(trimmed.to_string())
}
