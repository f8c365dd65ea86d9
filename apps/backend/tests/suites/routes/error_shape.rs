// Problem-details contract shared by every error response.

use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_parts;
use serde_json::Value;

use crate::support::app_builder::create_test_app;
use crate::support::factory::get_salary;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn test_error_body_fields_and_trace_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get_salary(&app, "deadbeef").await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    let problem = assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        "UNRECOGNIZED_TOKEN",
        actix_web::http::StatusCode::UNAUTHORIZED,
        None,
    );
    assert_eq!(problem.title, "Unrecognized Token");
    assert_eq!(
        problem.type_,
        "https://payroll.invalid/errors/UNRECOGNIZED_TOKEN"
    );
    assert_ne!(problem.trace_id, "unknown");

    let json: Value = serde_json::from_slice(&body)?;
    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(json.get(key).is_some(), "{key} field should be present");
    }

    Ok(())
}

#[actix_web::test]
async fn test_success_responses_carry_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert_eq!(trace_id.len(), 36);

    Ok(())
}

#[actix_web::test]
async fn test_trace_ids_differ_per_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let a = get_salary(&app, "deadbeef").await;
    let b = get_salary(&app, "deadbeef").await;
    assert_ne!(
        a.headers().get("x-trace-id").unwrap(),
        b.headers().get("x-trace-id").unwrap()
    );

    Ok(())
}
