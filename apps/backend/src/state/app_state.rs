use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::error::AppError;
use crate::services::tokens::TokenManager;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when the store is injected directly)
    pub db: Option<DatabaseConnection>,
    /// Token lifecycle over the configured credential store
    pub tokens: Option<Arc<TokenManager>>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        tokens: Option<Arc<TokenManager>>,
        auth: AuthConfig,
    ) -> Self {
        Self { db, tokens, auth }
    }

    /// Create an AppState with no store at all; every store-backed route answers 500.
    pub fn without_store(auth: AuthConfig) -> Self {
        Self::new(None, None, auth)
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Token manager, or `STORE_UNAVAILABLE` when the state was built without a store.
    pub fn tokens(&self) -> Result<&TokenManager, AppError> {
        self.tokens
            .as_deref()
            .ok_or_else(|| AppError::db_unavailable("Credential store not configured"))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("tokens", &self.tokens.is_some())
            .field("auth", &self.auth)
            .finish()
    }
}
