// Store failures surface as a generic 500 without leaking details.

use std::sync::Arc;

use backend_test_support::unique_helpers::unique_identity;
use payroll_backend::config::auth::AuthConfig;
use payroll_backend::infra::state::build_state;
use payroll_backend::state::app_state::AppState;
use serde_json::json;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;
use crate::support::factory::{get_salary, post_register, post_token};
use crate::support::failing_store::FailingStore;

#[actix_web::test]
async fn test_store_failure_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_store(Arc::new(FailingStore))
        .build()
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = post_token(&app, &unique_identity("alice"), "secret1").await;
    assert_problem_details_structure(resp, 500, "STORE_UNAVAILABLE", None).await;

    let resp = get_salary(&app, "0123456789abcdef0123456789abcdef").await;
    assert_problem_details_structure(resp, 500, "STORE_UNAVAILABLE", None).await;

    let resp = post_register(
        &app,
        json!({
            "identity": unique_identity("bob"),
            "secret": "pw",
            "compensation": 1.0,
            "adjustmentDate": "2024-01-01",
        }),
    )
    .await;
    assert_problem_details_structure(resp, 500, "STORE_UNAVAILABLE", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_malformed_date_checked_before_store() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_store(Arc::new(FailingStore))
        .build()
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = post_register(
        &app,
        json!({
            "identity": "x",
            "secret": "pw",
            "compensation": 1.0,
            "adjustmentDate": "soon",
        }),
    )
    .await;
    assert_problem_details_structure(resp, 400, "MALFORMED_DATE", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_state_without_store_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(AppState::without_store(AuthConfig::default()))
        .with_prod_routes()
        .build()
        .await?;

    let resp = post_token(&app, "alice", "secret1").await;
    assert_problem_details_structure(resp, 500, "STORE_UNAVAILABLE", Some("not configured"))
        .await;

    Ok(())
}
