//! Test helpers for generating unique test data
//!
//! ULID-based values keep tests isolated when they share a database.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique principal identity with the given prefix.
///
/// Identities are lowercased ULIDs so they survive Basic-auth encoding
/// unchanged and never contain a `:`.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_identity;
///
/// let a = unique_identity("alice");
/// assert!(a.starts_with("alice-"));
/// assert!(!a.contains(':'));
/// ```
pub fn unique_identity(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}
