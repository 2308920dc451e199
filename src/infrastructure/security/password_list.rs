// src/infrastructure/security/password_list.rs
use crate::application::{ApplicationResult, ports::password_policy::CompromisedPasswordChecker};
use async_trait::async_trait;
use std::collections::HashSet;

const LEAKED_PASSWORDS: &[&str] = &[
    "000000", "111111", "112233", "121212", "123123", "123321", "1234567", "12345678",
    "123456789", "1234567890", "123456", "123qwe", "1q2w3e", "1q2w3e4r", "555555", "654321",
    "666666", "696969", "7777777", "888888", "987654321", "aa123456", "abc123", "abcdef",
    "access", "admin", "admin123", "azerty", "baseball", "batman", "charlie", "dragon",
    "football", "freedom", "iloveyou", "letmein", "login", "master", "michael", "monkey",
    "mustang", "passw0rd", "password", "password1", "princess", "qazwsx", "qwerty",
    "qwerty123", "qwertyuiop", "shadow", "starwars", "sunshine", "superman", "trustno1",
    "welcome", "zaq12wsx",
];

/// A fixed list of passwords seen in public breaches, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct EmbeddedCompromisedPasswordList {
    entries: HashSet<String>,
}

impl Default for EmbeddedCompromisedPasswordList {
    fn default() -> Self {
        Self::with_entries(LEAKED_PASSWORDS.iter().copied())
    }
}

impl EmbeddedCompromisedPasswordList {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: entries.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

#[async_trait]
impl CompromisedPasswordChecker for EmbeddedCompromisedPasswordList {
    async fn is_compromised(&self, password: &str) -> ApplicationResult<bool> {
        Ok(self.entries.contains(&password.to_lowercase()))
    }
}
