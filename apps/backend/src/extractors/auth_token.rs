use std::fmt;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;

/// Bearer token extracted from the Authorization header
#[derive(Clone)]
pub struct AuthToken {
    pub token: String,
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &crate::logging::pii::redact_token(&self.token))
            .finish()
    }
}

/// Parse `Bearer <token>`. The scheme is matched exactly.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if scheme != "Bearer" || parts.next().is_some() {
        return None;
    }
    Some(token)
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer)
            .map(str::to_string);

        Box::pin(async move {
            let token = token.ok_or_else(AppError::unauthorized_missing_bearer)?;
            Ok(AuthToken { token })
        })
    }
}
