// tests/support/mocks/security.rs
use async_trait::async_trait;
use quire::application::{
    ApplicationResult, ports::password_policy::CompromisedPasswordChecker,
    ports::security::PasswordHasher,
};

/// Hashes to `hash::{password}`. Hashes starting with `legacy::` still verify
/// but report that they need rehashing. Hashing yields once, like a real
/// hasher handing off to a blocking thread, so concurrent callers interleave.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        tokio::task::yield_now().await;
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == format!("hash::{password}")
            || expected_hash == format!("legacy::{password}"))
    }

    fn needs_rehash(&self, expected_hash: &str) -> bool {
        !expected_hash.starts_with("hash::")
    }
}

#[derive(Clone, Debug, Default)]
pub struct LeakedPasswords;

#[async_trait]
impl CompromisedPasswordChecker for LeakedPasswords {
    async fn is_compromised(&self, password: &str) -> ApplicationResult<bool> {
        Ok(matches!(password, "123456" | "password" | "qwerty"))
    }
}
