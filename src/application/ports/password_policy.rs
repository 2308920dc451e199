// src/application/ports/password_policy.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Lookup against a list of passwords known to have leaked.
#[async_trait]
pub trait CompromisedPasswordChecker: Send + Sync {
    async fn is_compromised(&self, password: &str) -> ApplicationResult<bool>;
}
