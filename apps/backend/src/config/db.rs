use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment; selects database names and enforces test safety rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Which database engine backs the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Read `BACKEND_DB`, defaulting to a SQLite file.
pub fn db_kind_from_env() -> Result<DbKind, AppError> {
    match env::var("BACKEND_DB") {
        Ok(value) => value.parse(),
        Err(_) => Ok(DbKind::SqliteFile),
    }
}

/// Builds a database URL from environment variables
pub fn db_url(kind: DbKind, runtime: RuntimeEnv) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = postgres_db_name(runtime)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_path(runtime)?;
            // mode=rwc creates the file on first start
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn postgres_db_name(runtime: RuntimeEnv) -> Result<String, AppError> {
    match runtime {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn sqlite_path(runtime: RuntimeEnv) -> Result<String, AppError> {
    let default = match runtime {
        RuntimeEnv::Prod => "database.db",
        RuntimeEnv::Test => "database_test.db",
    };
    let path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| default.to_string());
    if path.trim().is_empty() {
        return Err(AppError::config("SQLITE_DB_PATH must not be empty"));
    }
    Ok(path)
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
