// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::{
    password_policy::CompromisedPasswordChecker,
    security::{PasswordHasher, TokenManager},
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) compromised_passwords: Arc<dyn CompromisedPasswordChecker>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        compromised_passwords: Arc<dyn CompromisedPasswordChecker>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            compromised_passwords,
        }
    }
}
