//! Transaction amount type
//!
//! Domain primitive for the monetary value of a financial transaction.
//! Amounts are validated at construction time, so an out-of-range value
//! never reaches the store.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound for a transaction amount.
pub const MAX_TRANSACTION_AMOUNT: Decimal =
    Decimal::from_parts(0x3C8A_BAEB, 0x0004_62D5, 0, false, 2);

/// Maximum decimal places (cents)
const MAX_SCALE: u32 = 2;

/// TransactionAmount represents a validated monetary value.
///
/// # Invariants
/// - Value is always positive (> 0); the direction is carried by the
///   transaction type
/// - At most 2 decimal places
/// - Strictly less than [`MAX_TRANSACTION_AMOUNT`]
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use track_expenses::domain::TransactionAmount;
///
/// let amount = TransactionAmount::new(Decimal::new(50, 1)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(50, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionAmount(Decimal);

/// Errors that can occur when creating a TransactionAmount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("amount has too many decimal places (max {MAX_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("amount must be less than {MAX_TRANSACTION_AMOUNT}")]
    ExceedsLimit,

    #[error("invalid amount format: {0}")]
    ParseError(String),
}

impl TransactionAmount {
    /// Create a new TransactionAmount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    /// - `AmountError::TooManyDecimals` if more than 2 decimal places remain
    ///   after dropping trailing zeros
    /// - `AmountError::ExceedsLimit` if value >= [`MAX_TRANSACTION_AMOUNT`]
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        // "5.000" is still five currency units, only significant digits count
        let scale = value.normalize().scale();
        if scale > MAX_SCALE {
            return Err(AmountError::TooManyDecimals(scale));
        }

        if value >= MAX_TRANSACTION_AMOUNT {
            return Err(AmountError::ExceedsLimit);
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for TransactionAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionAmount {
    type Err = AmountError;

    /// Parse plain (`"19.99"`) or scientific (`"1e3"`) notation.
    ///
    /// Numbers too large for a `Decimal` are still well-formed amounts, so
    /// they are reported as over the limit rather than as unreadable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let decimal = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|e| match s.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 1.0 => AmountError::ExceedsLimit,
                _ => AmountError::ParseError(e.to_string()),
            })?;
        TransactionAmount::new(decimal)
    }
}

impl From<TransactionAmount> for Decimal {
    fn from(amount: TransactionAmount) -> Self {
        amount.0
    }
}
