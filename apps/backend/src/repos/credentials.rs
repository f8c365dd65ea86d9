//! Credential store seam and the principal domain model.

use std::fmt;

use async_trait::async_trait;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::entities::employees;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::redact_token;

/// An issued token together with the instant it stops being live.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenLease {
    pub token: String,
    pub expires_at: OffsetDateTime,
}

impl TokenLease {
    pub fn new(token: impl Into<String>, expires_at: OffsetDateTime) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Live while `now <= expires_at`; expired strictly after.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now > self.expires_at
    }
}

impl fmt::Debug for TokenLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenLease")
            .field("token", &redact_token(&self.token))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// A registered employee as seen by the token lifecycle.
#[derive(Clone, PartialEq)]
pub struct Principal {
    pub id: i32,
    pub identity: String,
    pub secret: String,
    pub compensation: f64,
    pub adjustment_date: PrimitiveDateTime,
    /// `None` until the first login.
    pub lease: Option<TokenLease>,
}

impl Principal {
    /// Byte-for-byte secret comparison.
    pub fn secret_matches(&self, presented: &str) -> bool {
        self.secret.as_bytes() == presented.as_bytes()
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("identity", &self.identity)
            .field("secret", &"***")
            .field("compensation", &self.compensation)
            .field("adjustment_date", &self.adjustment_date)
            .field("lease", &self.lease)
            .finish()
    }
}

/// Fields required to create a principal. Token fields always start unset.
#[derive(Clone, PartialEq)]
pub struct NewPrincipal {
    pub identity: String,
    pub secret: String,
    pub compensation: f64,
    pub adjustment_date: PrimitiveDateTime,
}

impl fmt::Debug for NewPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPrincipal")
            .field("identity", &self.identity)
            .field("secret", &"***")
            .field("compensation", &self.compensation)
            .field("adjustment_date", &self.adjustment_date)
            .finish()
    }
}

/// Durable keyed access to principals.
///
/// Each method is a single statement against the store; callers get no
/// isolation across calls.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact match, no case folding.
    async fn find_by_identity(&self, identity: &str) -> Result<Option<Principal>, DomainError>;

    async fn find_by_token(&self, token: &str) -> Result<Option<Principal>, DomainError>;

    /// Fails with `DuplicateIdentity` when the identity is taken.
    async fn create(&self, principal: NewPrincipal) -> Result<Principal, DomainError>;

    /// Unconditionally overwrite the token pair of `identity`.
    async fn set_token(
        &self,
        identity: &str,
        token: &str,
        expires_at: OffsetDateTime,
    ) -> Result<(), DomainError>;
}

// Conversions between SeaORM models and domain models

impl TryFrom<employees::Model> for Principal {
    type Error = DomainError;

    fn try_from(model: employees::Model) -> Result<Self, Self::Error> {
        let lease = match (model.current_token, model.token_expiry) {
            (Some(token), Some(expires_at)) => Some(TokenLease { token, expires_at }),
            (None, None) => None,
            _ => {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "Employee {} has a token without an expiry (or the reverse)",
                        model.id
                    ),
                ))
            }
        };

        Ok(Self {
            id: model.id,
            identity: model.identity,
            secret: model.secret,
            compensation: model.compensation,
            adjustment_date: model.adjustment_date,
            lease,
        })
    }
}
