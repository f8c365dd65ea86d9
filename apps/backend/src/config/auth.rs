use std::env;

use time::Duration;

use crate::error::AppError;

/// Token lifetime used when `TOKEN_TTL_SECONDS` is not set.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 30;

/// Largest accepted `TOKEN_TTL_SECONDS` (one year).
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Token lifecycle settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// How long an issued token stays live before the next access rotates it
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(token_ttl: Duration) -> Self {
        Self { token_ttl }
    }

    pub fn with_ttl_secs(secs: i64) -> Self {
        Self::new(Duration::seconds(secs))
    }

    /// Read `TOKEN_TTL_SECONDS`; must be an integer in `0..=MAX_TOKEN_TTL_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("TOKEN_TTL_SECONDS") {
            Ok(raw) => {
                let secs: i64 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!(
                        "TOKEN_TTL_SECONDS must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                if secs < 0 {
                    return Err(AppError::config(format!(
                        "TOKEN_TTL_SECONDS must not be negative, got {secs}"
                    )));
                }
                if secs > MAX_TOKEN_TTL_SECS {
                    return Err(AppError::config(format!(
                        "TOKEN_TTL_SECONDS must be at most {MAX_TOKEN_TTL_SECS}, got {secs}"
                    )));
                }
                Ok(Self::with_ttl_secs(secs))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_ttl_secs(DEFAULT_TOKEN_TTL_SECS)
    }
}
