//! Business error catalog
//!
//! Every client-visible failure maps to exactly one entry of a fixed table.
//! The symbolic keys are part of the public API and must never be renumbered.

use axum::http::StatusCode;
use std::fmt;
use std::str::FromStr;

/// Symbolic business error keys
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Wallet not found
    W003,
    /// Financial transaction not found
    FT001,
    /// Transaction type does not match category type
    FT002,
    /// Financial transaction category not found
    FTC001,
    /// Unexpected server error
    TEA001,
    /// Malformed request body
    TEA002,
    /// Validation failed
    TEA003,
}

/// One row of the catalog
#[derive(Debug, PartialEq, Eq)]
pub struct ErrorCodeEntry {
    pub code: ErrorCode,
    pub http_status: StatusCode,
    pub business_status: &'static str,
    pub business_message: &'static str,
}

impl ErrorCodeEntry {
    /// Numeric code reported as `statusCode` in error bodies
    pub fn business_status_code(&self) -> u16 {
        self.http_status.as_u16()
    }
}

/// Indexed by `ErrorCode as usize`; order must follow the enum.
static CATALOG: [ErrorCodeEntry; 7] = [
    ErrorCodeEntry {
        code: ErrorCode::W003,
        http_status: StatusCode::NOT_FOUND,
        business_status: "W003",
        business_message: "Wallet with the given ID does not exist",
    },
    ErrorCodeEntry {
        code: ErrorCode::FT001,
        http_status: StatusCode::NOT_FOUND,
        business_status: "FT001",
        business_message: "Financial transaction with the given ID does not exist",
    },
    ErrorCodeEntry {
        code: ErrorCode::FT002,
        http_status: StatusCode::BAD_REQUEST,
        business_status: "FT002",
        business_message: "Financial transaction type does not match the category type",
    },
    ErrorCodeEntry {
        code: ErrorCode::FTC001,
        http_status: StatusCode::NOT_FOUND,
        business_status: "FTC001",
        business_message: "Financial transaction category with the given ID does not exist",
    },
    ErrorCodeEntry {
        code: ErrorCode::TEA001,
        http_status: StatusCode::INTERNAL_SERVER_ERROR,
        business_status: "TEA001",
        business_message: "Unexpected server error",
    },
    ErrorCodeEntry {
        code: ErrorCode::TEA002,
        http_status: StatusCode::BAD_REQUEST,
        business_status: "TEA002",
        business_message: "Request body could not be read",
    },
    ErrorCodeEntry {
        code: ErrorCode::TEA003,
        http_status: StatusCode::BAD_REQUEST,
        business_status: "TEA003",
        business_message: "Validation failed",
    },
];

impl ErrorCode {
    /// All codes, in catalog order
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::W003,
        ErrorCode::FT001,
        ErrorCode::FT002,
        ErrorCode::FTC001,
        ErrorCode::TEA001,
        ErrorCode::TEA002,
        ErrorCode::TEA003,
    ];

    pub fn entry(self) -> &'static ErrorCodeEntry {
        &CATALOG[self as usize]
    }

    pub fn http_status(self) -> StatusCode {
        self.entry().http_status
    }

    pub fn business_status(self) -> &'static str {
        self.entry().business_status
    }

    pub fn business_message(self) -> &'static str {
        self.entry().business_message
    }

    pub fn business_status_code(self) -> u16 {
        self.entry().business_status_code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.business_status())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Look up a code by its symbolic key, e.g. `"W003"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|entry| entry.business_status == s)
            .map(|entry| entry.code)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
