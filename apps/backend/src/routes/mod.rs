use actix_web::web;

pub mod auth;
pub mod health;
pub mod salary;

/// Register every route. Used by `main.rs` and by the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Token and registration routes: /token, /register
    cfg.configure(auth::configure_routes);

    // Protected read: /salary
    cfg.configure(salary::configure_routes);
}
