//! Token lifecycle: registration, login, and rotate-on-access.

use std::sync::Arc;

use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info, warn};

use crate::auth::token::{mint_token, IssuedToken};
use crate::domain::registration::Registration;
use crate::errors::domain::DomainError;
use crate::logging::pii::{redact_token, Redacted};
use crate::repos::credentials::{CredentialStore, Principal};

/// Outcome of presenting a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The token the caller should use from now on. Differs from the
    /// presented one only when `rotated` is true.
    pub token: String,
    pub rotated: bool,
    pub compensation: f64,
    pub adjustment_date: PrimitiveDateTime,
}

/// Issues, validates and rotates bearer tokens against a credential store.
///
/// Every operation that reads the clock takes `now` explicitly.
pub struct TokenManager {
    store: Arc<dyn CredentialStore>,
    ttl: Duration,
}

impl TokenManager {
    pub fn new(store: Arc<dyn CredentialStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a principal with unset token fields.
    ///
    /// The identity pre-check gives the common case a clean error; the
    /// store's unique constraint still decides concurrent registrations.
    pub async fn register(&self, registration: Registration) -> Result<Principal, DomainError> {
        if self
            .store
            .find_by_identity(&registration.identity)
            .await?
            .is_some()
        {
            warn!(identity = %Redacted(&registration.identity), "Registration rejected: identity taken");
            return Err(DomainError::duplicate_identity(
                "Identity already registered",
            ));
        }

        let principal = self.store.create(registration.into()).await?;
        info!(
            employee_id = principal.id,
            identity = %Redacted(&principal.identity),
            "Employee registered"
        );
        Ok(principal)
    }

    /// Check `(identity, secret)` and issue a fresh token, replacing any previous one.
    pub async fn login(
        &self,
        identity: &str,
        secret: &str,
        now: OffsetDateTime,
    ) -> Result<IssuedToken, DomainError> {
        let principal = match self.store.find_by_identity(identity).await? {
            Some(p) if p.secret_matches(secret) => p,
            Some(_) => {
                warn!(identity = %Redacted(identity), "Login failed: secret mismatch");
                return Err(DomainError::invalid_credentials());
            }
            None => {
                warn!(identity = %Redacted(identity), "Login failed: unknown identity");
                return Err(DomainError::invalid_credentials());
            }
        };

        let issued = mint_token(now, self.ttl)?;
        self.store
            .set_token(&principal.identity, &issued.token, issued.expires_at)
            .await?;

        info!(
            employee_id = principal.id,
            token = %redact_token(&issued.token),
            expires_at = %issued.expires_at,
            "Token issued"
        );
        Ok(issued)
    }

    /// Resolve a presented token. An expired token is replaced rather than
    /// refused; only an unknown token value is denied.
    ///
    /// Two concurrent resolutions of one expired token each mint a
    /// replacement and the last write wins.
    pub async fn resolve(
        &self,
        presented: &str,
        now: OffsetDateTime,
    ) -> Result<Resolution, DomainError> {
        let principal = match self.store.find_by_token(presented).await? {
            Some(p) => p,
            None => {
                warn!(token = %redact_token(presented), "Unrecognized token presented");
                return Err(DomainError::unrecognized_token());
            }
        };

        // find_by_token matched current_token, so the lease is present
        let expired = principal
            .lease
            .as_ref()
            .map_or(true, |lease| lease.is_expired_at(now));

        if !expired {
            debug!(
                employee_id = principal.id,
                token = %redact_token(presented),
                "Token live"
            );
            return Ok(Resolution {
                token: presented.to_string(),
                rotated: false,
                compensation: principal.compensation,
                adjustment_date: principal.adjustment_date,
            });
        }

        let replacement = mint_token(now, self.ttl)?;
        self.store
            .set_token(
                &principal.identity,
                &replacement.token,
                replacement.expires_at,
            )
            .await?;

        info!(
            employee_id = principal.id,
            old_token = %redact_token(presented),
            new_token = %redact_token(&replacement.token),
            expires_at = %replacement.expires_at,
            "Expired token rotated"
        );

        Ok(Resolution {
            token: replacement.token,
            rotated: true,
            compensation: principal.compensation,
            adjustment_date: principal.adjustment_date,
        })
    }
}
