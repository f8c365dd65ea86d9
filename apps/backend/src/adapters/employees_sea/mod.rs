//! SeaORM adapter for the employee credential store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::employees;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::credentials::{CredentialStore, NewPrincipal, Principal};

pub mod dto;

pub use dto::{EmployeeCreate, TokenUpdate};

// Adapter functions return DbErr; the store impl below maps to DomainError.

pub async fn find_by_identity<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &str,
) -> Result<Option<employees::Model>, sea_orm::DbErr> {
    employees::Entity::find()
        .filter(employees::Column::Identity.eq(identity))
        .one(conn)
        .await
}

pub async fn find_by_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    token: &str,
) -> Result<Option<employees::Model>, sea_orm::DbErr> {
    employees::Entity::find()
        .filter(employees::Column::CurrentToken.eq(token))
        .one(conn)
        .await
}

pub async fn create_employee<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: EmployeeCreate,
) -> Result<employees::Model, sea_orm::DbErr> {
    let employee_active = employees::ActiveModel {
        id: NotSet,
        identity: Set(dto.identity),
        secret: Set(dto.secret),
        compensation: Set(dto.compensation),
        adjustment_date: Set(dto.adjustment_date),
        current_token: Set(None),
        token_expiry: Set(None),
    };

    employee_active.insert(conn).await
}

/// Overwrite both token columns in one UPDATE. Returns the number of rows touched.
pub async fn set_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TokenUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let result = employees::Entity::update_many()
        .col_expr(employees::Column::CurrentToken, Expr::value(dto.token))
        .col_expr(employees::Column::TokenExpiry, Expr::value(dto.expires_at))
        .filter(employees::Column::Identity.eq(dto.identity))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// `CredentialStore` backed by a shared sea-orm connection pool.
#[derive(Clone)]
pub struct EmployeeStoreSea {
    db: DatabaseConnection,
}

impl EmployeeStoreSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for EmployeeStoreSea {
    async fn find_by_identity(&self, identity: &str) -> Result<Option<Principal>, DomainError> {
        find_by_identity(&self.db, identity)
            .await
            .map_err(map_db_err)?
            .map(Principal::try_from)
            .transpose()
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Principal>, DomainError> {
        find_by_token(&self.db, token)
            .await
            .map_err(map_db_err)?
            .map(Principal::try_from)
            .transpose()
    }

    async fn create(&self, principal: NewPrincipal) -> Result<Principal, DomainError> {
        let dto = EmployeeCreate::new(
            principal.identity,
            principal.secret,
            principal.compensation,
            principal.adjustment_date,
        );
        let model = create_employee(&self.db, dto).await.map_err(map_db_err)?;
        Principal::try_from(model)
    }

    async fn set_token(
        &self,
        identity: &str,
        token: &str,
        expires_at: OffsetDateTime,
    ) -> Result<(), DomainError> {
        let rows = set_token(&self.db, TokenUpdate::new(identity, token, expires_at))
            .await
            .map_err(map_db_err)?;
        if rows == 0 {
            return Err(DomainError::infra(
                InfraErrorKind::Other("MissingPrincipal".into()),
                "No employee record to attach the token to",
            ));
        }
        Ok(())
    }
}
