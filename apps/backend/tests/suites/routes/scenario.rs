// End-to-end walk through the token lifecycle with a one second TTL.

use std::time::Duration as StdDuration;

use actix_web::test;
use backend_test_support::unique_helpers::unique_identity;
use serde_json::Value;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;
use crate::support::factory::{get_salary, login, register};
use crate::support::test_state::build_test_state_with_ttl;

#[actix_web::test]
async fn test_register_login_read_rotate_reject() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state_with_ttl(1).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let alice = unique_identity("alice");
    register(&app, &alice, "secret1", 5000.0, "2024-01-01T00:00:00").await;
    let original = login(&app, &alice, "secret1").await;

    // Within the TTL: same token, protected fields returned
    let body: Value = test::read_body_json(get_salary(&app, &original).await).await;
    assert_eq!(body["compensation"], 5000.0);
    assert_eq!(body["adjustmentDate"], "2024-01-01T00:00:00");
    assert_eq!(body["token"], original.as_str());
    assert_eq!(body["rotated"], false);

    tokio::time::sleep(StdDuration::from_millis(1500)).await;

    // After the TTL: still succeeds, but with a different token
    let body: Value = test::read_body_json(get_salary(&app, &original).await).await;
    assert_eq!(body["compensation"], 5000.0);
    assert_eq!(body["rotated"], true);
    let replacement = body["token"].as_str().unwrap().to_string();
    assert_ne!(replacement, original);

    // Reusing the stale original is refused
    let resp = get_salary(&app, &original).await;
    assert_problem_details_structure(resp, 401, "UNRECOGNIZED_TOKEN", None).await;

    // The replacement is live
    let body: Value = test::read_body_json(get_salary(&app, &replacement).await).await;
    assert_eq!(body["token"], replacement.as_str());
    assert_eq!(body["rotated"], false);

    Ok(())
}
