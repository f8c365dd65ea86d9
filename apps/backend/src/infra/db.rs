use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Get database engine name for logging
fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

fn connect_options(kind: DbKind, url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.acquire_timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        // Every connection to sqlite::memory: is its own database
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(4);
        }
        DbKind::Postgres => {
            opt.min_connections(1)
                .max_connections(10)
                .idle_timeout(Duration::from_secs(30));
        }
    }
    opt
}

/// Retry a connection attempt with fixed interval delays
/// Returns the result of the last attempt after all retries are exhausted
pub async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| AppError::config("connection retry failed without an attempt")))
}

/// Open a pool for the configured database. Does NOT run migrations.
pub async fn connect_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, env)?;
    let opt = connect_options(kind, &url);

    // Only a network database is worth retrying
    let attempts = match kind {
        DbKind::Postgres => CONNECT_ATTEMPTS,
        DbKind::SqliteFile | DbKind::SqliteMemory => 1,
    };

    let conn = retry_connection(
        || {
            let opt = opt.clone();
            async move {
                Database::connect(opt)
                    .await
                    .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))
            }
        },
        attempts,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(engine = db_engine(kind), env = ?env, "pool=ready");
    Ok(conn)
}

/// Single entrypoint used by the state builder: connect, then apply pending migrations.
pub async fn bootstrap_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind, env).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(engine = db_engine(kind), "bootstrap=migrated");
    Ok(conn)
}
