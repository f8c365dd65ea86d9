// Integration tests for the token endpoint.
//
// Tests both successful logins and credential failures.

use actix_web::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use actix_web::test;
use backend_test_support::unique_helpers::unique_identity;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;
use crate::support::factory::{post_token, register};
use crate::support::test_state::{build_test_state, build_test_state_with_ttl};

// ============================================================================
// Happy Path Tests
// ============================================================================

#[actix_web::test]
async fn test_login_returns_token_and_expiry() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("alice");
    register(&app, &identity, "secret1", 5000.0, "2024-01-01T00:00:00").await;

    let before = OffsetDateTime::now_utc();
    let resp = post_token(&app, &identity, "secret1").await;
    let after = OffsetDateTime::now_utc();
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    let expires_at = OffsetDateTime::parse(body["expires_at"].as_str().unwrap(), &Rfc3339)?;
    assert!(expires_at >= before + Duration::seconds(30));
    assert!(expires_at <= after + Duration::seconds(30));

    Ok(())
}

#[actix_web::test]
async fn test_each_login_issues_a_new_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("bob");
    register(&app, &identity, "hunter2", 4200.0, "2024-02-01").await;

    let first: Value = test::read_body_json(post_token(&app, &identity, "hunter2").await).await;
    let second: Value = test::read_body_json(post_token(&app, &identity, "hunter2").await).await;
    assert_ne!(first["token"], second["token"]);

    Ok(())
}

#[actix_web::test]
async fn test_secret_may_contain_colon() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("carol");
    register(&app, &identity, "pa:ss:word", 100.0, "2024-01-01").await;

    let resp = post_token(&app, &identity, "pa:ss:word").await;
    assert_eq!(resp.status().as_u16(), 200);

    Ok(())
}

// ============================================================================
// Credential Failures
// ============================================================================

#[actix_web::test]
async fn test_wrong_secret_is_invalid_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("alice");
    register(&app, &identity, "secret1", 5000.0, "2024-01-01T00:00:00").await;

    let resp = post_token(&app, &identity, "wrong").await;
    assert_eq!(
        resp.headers().get(WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"payroll\""
    );
    let problem = assert_problem_details_structure(resp, 401, "INVALID_CREDENTIALS", None).await;
    assert!(!problem.detail.contains("secret1"));

    Ok(())
}

#[actix_web::test]
async fn test_secret_comparison_is_exact() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("dave");
    register(&app, &identity, "Secret", 1.0, "2024-01-01").await;

    for attempt in ["secret", "SECRET", "Secret ", " Secret", ""] {
        let resp = post_token(&app, &identity, attempt).await;
        assert_eq!(resp.status().as_u16(), 401, "attempt {attempt:?}");
    }

    Ok(())
}

#[actix_web::test]
async fn test_unknown_identity_is_invalid_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = post_token(&app, &unique_identity("ghost"), "whatever").await;
    assert_problem_details_structure(resp, 401, "INVALID_CREDENTIALS", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_identity_is_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("erin");
    register(&app, &identity, "pw", 1.0, "2024-01-01").await;

    let resp = post_token(&app, &identity.to_uppercase(), "pw").await;
    assert_problem_details_structure(resp, 401, "INVALID_CREDENTIALS", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_missing_or_malformed_basic_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post().uri("/token").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_CREDENTIALS", None).await;

    for header in ["Bearer abc", "Basic %%%", "Basic bm9jb2xvbg=="] {
        let req = test::TestRequest::post()
            .uri("/token")
            .insert_header((AUTHORIZATION, header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"payroll\"",
            "header {header}"
        );
        assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_CREDENTIALS", None)
            .await;
    }

    Ok(())
}

#[actix_web::test]
async fn test_unrepresentable_expiry_is_internal_error() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state_with_ttl(i64::MAX / 2).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let identity = unique_identity("alice");
    register(&app, &identity, "secret1", 5000.0, "2024-01-01").await;

    let resp = post_token(&app, &identity, "secret1").await;
    assert_problem_details_structure(resp, 500, "INTERNAL", Some("expiry")).await;

    Ok(())
}
