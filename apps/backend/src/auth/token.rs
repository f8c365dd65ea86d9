use rand::Rng;
use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Raw token entropy: 128 bits.
pub const TOKEN_BYTES: usize = 16;

/// Length of the hex-encoded token value.
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;

/// A freshly minted bearer token and its expiry instant.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &crate::logging::pii::redact_token(&self.token))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Mint an opaque bearer token that stays live until `now + ttl`.
///
/// The value carries no structure; it is only meaningful as a lookup key.
pub fn mint_token(now: OffsetDateTime, ttl: Duration) -> Result<IssuedToken, DomainError> {
    let expires_at = now.checked_add(ttl).ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::ExpiryOutOfRange,
            format!("Token expiry overflows: now={now}, ttl={ttl}"),
        )
    })?;

    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);

    Ok(IssuedToken {
        token: hex::encode(bytes),
        expires_at,
    })
}
