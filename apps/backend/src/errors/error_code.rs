//! Error codes for the payroll backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the payroll backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Identity/secret pair did not match a registered principal
    InvalidCredentials,
    /// Missing or malformed Basic credentials
    UnauthorizedMissingCredentials,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Bearer token is not held by any principal
    UnrecognizedToken,

    // Request Validation
    /// adjustmentDate is not an ISO-8601 timestamp
    MalformedDate,
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,

    // Conflicts
    /// Identity already registered
    DuplicateIdentity,
    /// Freshly minted token collided with one already issued
    TokenCollision,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Credential store could not be reached
    StoreUnavailable,
    /// Credential store operation failed
    DbError,
    /// Persisted data violates a model invariant
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnauthorizedMissingCredentials => "UNAUTHORIZED_MISSING_CREDENTIALS",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnrecognizedToken => "UNRECOGNIZED_TOKEN",

            Self::MalformedDate => "MALFORMED_DATE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DuplicateIdentity => "DUPLICATE_IDENTITY",
            Self::TokenCollision => "TOKEN_COLLISION",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DbError => "DB_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
