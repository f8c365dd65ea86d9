//! DTOs for employees_sea adapter.

use time::{OffsetDateTime, PrimitiveDateTime};

/// DTO for inserting a new employee row. Token columns start NULL.
#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub identity: String,
    pub secret: String,
    pub compensation: f64,
    pub adjustment_date: PrimitiveDateTime,
}

impl EmployeeCreate {
    pub fn new(
        identity: impl Into<String>,
        secret: impl Into<String>,
        compensation: f64,
        adjustment_date: PrimitiveDateTime,
    ) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
            compensation,
            adjustment_date,
        }
    }
}

/// DTO for overwriting the token pair of the row keyed by `identity`.
#[derive(Debug, Clone)]
pub struct TokenUpdate {
    pub identity: String,
    pub token: String,
    pub expires_at: OffsetDateTime,
}

impl TokenUpdate {
    pub fn new(
        identity: impl Into<String>,
        token: impl Into<String>,
        expires_at: OffsetDateTime,
    ) -> Self {
        Self {
            identity: identity.into(),
            token: token.into(),
            expires_at,
        }
    }
}
