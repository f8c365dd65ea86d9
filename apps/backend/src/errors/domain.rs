//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    Timeout,
    DataCorruption,
    /// Token expiry would fall outside the representable time range
    ExpiryOutOfRange,
    Other(String),
}

/// Request validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MalformedDate,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DuplicateIdentity,
    TokenCollision,
    Other(String),
}

/// Why a caller was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureKind {
    InvalidCredentials,
    UnrecognizedToken,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Caller could not be authenticated
    Unauthorized(AuthFailureKind),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Unauthorized(kind) => write!(f, "unauthorized: {kind:?}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthorized(AuthFailureKind::InvalidCredentials)
    }
    pub fn unrecognized_token() -> Self {
        Self::Unauthorized(AuthFailureKind::UnrecognizedToken)
    }
    pub fn malformed_date(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::MalformedDate, detail)
    }
    pub fn duplicate_identity(detail: impl Into<String>) -> Self {
        Self::conflict(ConflictKind::DuplicateIdentity, detail)
    }
    pub fn store_unavailable(detail: impl Into<String>) -> Self {
        Self::infra(InfraErrorKind::StoreUnavailable, detail)
    }
}
