use backend_test_support::unique_helpers::{unique_identity, unique_str};
use payroll_backend::adapters::employees_sea::{
    self as employees_adapter, EmployeeCreate, EmployeeStoreSea, TokenUpdate,
};
use payroll_backend::errors::domain::{ConflictKind, InfraErrorKind};
use payroll_backend::errors::DomainError;
use payroll_backend::infra::db_errors::map_db_err;
use payroll_backend::repos::credentials::{CredentialStore, NewPrincipal};
use time::macros::datetime;

use crate::support::test_state::memory_db;

fn new_employee(identity: &str) -> EmployeeCreate {
    EmployeeCreate::new(identity, "secret1", 5000.0, datetime!(2024-01-01 0:00))
}

#[tokio::test]
async fn test_create_and_find_by_identity() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;
    let identity = unique_identity("alice");

    let created = employees_adapter::create_employee(&db, new_employee(&identity)).await?;
    assert!(created.id > 0);
    assert_eq!(created.identity, identity);
    assert!(created.current_token.is_none());
    assert!(created.token_expiry.is_none());

    let found = employees_adapter::find_by_identity(&db, &identity)
        .await?
        .expect("employee should exist");
    assert_eq!(found, created);

    assert!(employees_adapter::find_by_identity(&db, &identity.to_uppercase())
        .await?
        .is_none());

    Ok(())
}

#[tokio::test]
async fn test_set_token_and_find_by_token() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;
    let identity = unique_identity("bob");
    employees_adapter::create_employee(&db, new_employee(&identity)).await?;

    let token = unique_str("tok");
    let expires_at = datetime!(2024-06-01 12:00:30 UTC);
    let rows =
        employees_adapter::set_token(&db, TokenUpdate::new(&identity, &token, expires_at)).await?;
    assert_eq!(rows, 1);

    let found = employees_adapter::find_by_token(&db, &token)
        .await?
        .expect("token should resolve");
    assert_eq!(found.identity, identity);
    assert_eq!(found.token_expiry, Some(expires_at));

    // Overwrite replaces both columns
    let next = unique_str("tok");
    let next_expiry = datetime!(2024-06-01 13:00:00 UTC);
    employees_adapter::set_token(&db, TokenUpdate::new(&identity, &next, next_expiry)).await?;
    assert!(employees_adapter::find_by_token(&db, &token).await?.is_none());
    let found = employees_adapter::find_by_token(&db, &next)
        .await?
        .expect("new token should resolve");
    assert_eq!(found.token_expiry, Some(next_expiry));

    Ok(())
}

#[tokio::test]
async fn test_set_token_for_unknown_identity() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;

    let rows = employees_adapter::set_token(
        &db,
        TokenUpdate::new(
            unique_identity("ghost"),
            unique_str("tok"),
            datetime!(2024-06-01 12:00 UTC),
        ),
    )
    .await?;
    assert_eq!(rows, 0);

    let store = EmployeeStoreSea::new(db);
    let err = store
        .set_token(
            &unique_identity("ghost"),
            "abc",
            datetime!(2024-06-01 12:00 UTC),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Infra(InfraErrorKind::Other(_), _)));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_identity_constraint() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;
    let identity = unique_identity("carol");
    employees_adapter::create_employee(&db, new_employee(&identity)).await?;

    let err = employees_adapter::create_employee(&db, new_employee(&identity))
        .await
        .unwrap_err();
    assert!(matches!(
        map_db_err(err),
        DomainError::Conflict(ConflictKind::DuplicateIdentity, _)
    ));

    // Same path through the store seam
    let store = EmployeeStoreSea::new(db);
    let err = store
        .create(NewPrincipal {
            identity: identity.clone(),
            secret: "x".into(),
            compensation: 1.0,
            adjustment_date: datetime!(2020-01-01 0:00),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateIdentity, _)
    ));

    Ok(())
}

#[tokio::test]
async fn test_token_uniqueness_constraint() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;
    let first = unique_identity("dave");
    let second = unique_identity("erin");
    employees_adapter::create_employee(&db, new_employee(&first)).await?;
    employees_adapter::create_employee(&db, new_employee(&second)).await?;

    let token = unique_str("shared");
    let expiry = datetime!(2024-06-01 12:00 UTC);
    employees_adapter::set_token(&db, TokenUpdate::new(&first, &token, expiry)).await?;

    let err = employees_adapter::set_token(&db, TokenUpdate::new(&second, &token, expiry))
        .await
        .unwrap_err();
    assert!(matches!(
        map_db_err(err),
        DomainError::Conflict(ConflictKind::TokenCollision, _)
    ));

    Ok(())
}

#[tokio::test]
async fn test_store_maps_rows_to_principals() -> Result<(), Box<dyn std::error::Error>> {
    let db = memory_db().await?;
    let store = EmployeeStoreSea::new(db);
    let identity = unique_identity("frank");

    let created = store
        .create(NewPrincipal {
            identity: identity.clone(),
            secret: "pw".into(),
            compensation: 7500.25,
            adjustment_date: datetime!(2022-03-04 05:06:07),
        })
        .await?;
    assert!(created.lease.is_none());
    assert_eq!(created.compensation, 7500.25);

    let expiry = datetime!(2024-06-01 12:00 UTC);
    store.set_token(&identity, "feedface", expiry).await?;

    let principal = store
        .find_by_token("feedface")
        .await?
        .expect("principal by token");
    let lease = principal.lease.expect("lease after set_token");
    assert_eq!(lease.token, "feedface");
    assert_eq!(lease.expires_at, expiry);
    assert_eq!(principal.adjustment_date, datetime!(2022-03-04 05:06:07));

    assert!(store.find_by_identity("nobody").await?.is_none());
    assert!(store.find_by_token("nothing").await?.is_none());

    Ok(())
}
