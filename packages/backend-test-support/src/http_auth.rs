//! Authorization header builders for request tests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build an `Authorization: Basic ...` header value.
///
/// # Examples
/// ```
/// use backend_test_support::http_auth::basic_auth;
///
/// assert_eq!(basic_auth("alice", "secret1"), "Basic YWxpY2U6c2VjcmV0MQ==");
/// ```
pub fn basic_auth(identity: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{identity}:{secret}")))
}

/// Build an `Authorization: Bearer ...` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
