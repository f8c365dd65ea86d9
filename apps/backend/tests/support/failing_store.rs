use async_trait::async_trait;
use payroll_backend::errors::DomainError;
use payroll_backend::repos::credentials::{CredentialStore, NewPrincipal, Principal};
use time::OffsetDateTime;

/// Store whose every call fails as if the database were unreachable.
pub struct FailingStore;

fn down() -> DomainError {
    DomainError::store_unavailable("Credential store unavailable")
}

#[async_trait]
impl CredentialStore for FailingStore {
    async fn find_by_identity(&self, _identity: &str) -> Result<Option<Principal>, DomainError> {
        Err(down())
    }

    async fn find_by_token(&self, _token: &str) -> Result<Option<Principal>, DomainError> {
        Err(down())
    }

    async fn create(&self, _principal: NewPrincipal) -> Result<Principal, DomainError> {
        Err(down())
    }

    async fn set_token(
        &self,
        _identity: &str,
        _token: &str,
        _expires_at: OffsetDateTime,
    ) -> Result<(), DomainError> {
        Err(down())
    }
}
