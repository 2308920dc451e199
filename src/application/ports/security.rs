// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` is a plain mismatch; `Err` means the check itself failed.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;

    /// Whether a stored hash was produced with weaker or different parameters
    /// than the ones `hash` currently uses.
    fn needs_rehash(&self, expected_hash: &str) -> bool;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
