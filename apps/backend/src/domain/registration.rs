use std::fmt;

use time::PrimitiveDateTime;

use super::dates::parse_adjustment_date;
use crate::errors::domain::DomainError;
use crate::repos::credentials::NewPrincipal;

/// A registration whose adjustment date has already been parsed.
#[derive(Clone, PartialEq)]
pub struct Registration {
    pub identity: String,
    pub secret: String,
    pub compensation: f64,
    pub adjustment_date: PrimitiveDateTime,
}

impl Registration {
    /// Build a registration from raw request fields.
    ///
    /// Fails with `MalformedDate` when `adjustment_date` is not ISO-8601.
    pub fn parse(
        identity: impl Into<String>,
        secret: impl Into<String>,
        compensation: f64,
        adjustment_date: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            identity: identity.into(),
            secret: secret.into(),
            compensation,
            adjustment_date: parse_adjustment_date(adjustment_date)?,
        })
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("identity", &self.identity)
            .field("secret", &"***")
            .field("compensation", &self.compensation)
            .field("adjustment_date", &self.adjustment_date)
            .finish()
    }
}

impl From<Registration> for NewPrincipal {
    fn from(r: Registration) -> Self {
        Self {
            identity: r.identity,
            secret: r.secret,
            compensation: r.compensation,
            adjustment_date: r.adjustment_date,
        }
    }
}
