#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::token::{mint_token, IssuedToken};
pub use config::auth::AuthConfig;
pub use config::db::{db_url, DbKind, RuntimeEnv};
pub use error::AppError;
pub use extractors::{AuthToken, BasicCredentials};
pub use infra::db::connect_db;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use repos::credentials::{CredentialStore, NewPrincipal, Principal, TokenLease};
pub use services::tokens::{Resolution, TokenManager};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
