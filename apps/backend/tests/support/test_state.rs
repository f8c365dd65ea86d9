use std::sync::Arc;

use payroll_backend::adapters::employees_sea::EmployeeStoreSea;
use payroll_backend::config::auth::AuthConfig;
use payroll_backend::config::db::{DbKind, RuntimeEnv};
use payroll_backend::infra::db::bootstrap_db;
use payroll_backend::infra::state::build_state;
use payroll_backend::services::tokens::TokenManager;
use payroll_backend::state::app_state::AppState;
use payroll_backend::AppError;
use sea_orm::DatabaseConnection;
use time::Duration;

/// Fresh, migrated in-memory database. Each call is an isolated store.
pub async fn memory_db() -> Result<DatabaseConnection, AppError> {
    bootstrap_db(DbKind::SqliteMemory, RuntimeEnv::Test).await
}

/// App state over a fresh in-memory database with the given token TTL.
pub async fn build_test_state_with_ttl(ttl_secs: i64) -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .with_auth(AuthConfig::with_ttl_secs(ttl_secs))
        .build()
        .await
}

/// App state with the default 30 second TTL.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with_ttl(30).await
}

/// Token manager over its own in-memory store, for service-level tests
/// that drive the clock explicitly.
pub async fn token_manager(ttl: Duration) -> Result<(TokenManager, DatabaseConnection), AppError> {
    let db = memory_db().await?;
    let store = Arc::new(EmployeeStoreSea::new(db.clone()));
    Ok((TokenManager::new(store, ttl), db))
}
