use actix_web::{web, App, HttpServer};
use payroll_backend::config::auth::AuthConfig;
use payroll_backend::config::db::{db_kind_from_env, RuntimeEnv};
use payroll_backend::infra::state::build_state;
use payroll_backend::middleware::request_trace::RequestTrace;
use payroll_backend::middleware::structured_logger::StructuredLogger;
use payroll_backend::middleware::trace_span::TraceSpan;
use payroll_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let (db_kind, auth) = match (db_kind_from_env(), AuthConfig::from_env()) {
        (Ok(kind), Ok(auth)) => (kind, auth),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Create application state using unified builder
    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_auth(auth)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        db = ?db_kind,
        token_ttl_secs = auth.token_ttl.whole_seconds(),
        "Database connected"
    );
    info!(%host, port, "Starting payroll backend");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
