use std::sync::Arc;

use crate::adapters::employees_sea::EmployeeStoreSea;
use crate::config::auth::AuthConfig;
use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::credentials::CredentialStore;
use crate::services::tokens::TokenManager;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    auth: AuthConfig,
    store: Option<Arc<dyn CredentialStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
            auth: AuthConfig::default(),
            store: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Use this store instead of one backed by the database. Takes precedence over `with_db`.
    pub fn with_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let ttl = self.auth.token_ttl;

        if let Some(store) = self.store {
            let tokens = Arc::new(TokenManager::new(store, ttl));
            return Ok(AppState::new(None, Some(tokens), self.auth));
        }

        match self.db_kind {
            Some(kind) => {
                // single entrypoint: build + migrate
                let conn = bootstrap_db(kind, self.env).await?;
                let store = Arc::new(EmployeeStoreSea::new(conn.clone()));
                let tokens = Arc::new(TokenManager::new(store, ttl));
                Ok(AppState::new(Some(conn), Some(tokens), self.auth))
            }
            None => Ok(AppState::without_store(self.auth)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
