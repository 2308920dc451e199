// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Principal, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;
        let id = user.persisted_id()?;

        let principal = Principal::user(id, user.email.clone(), user.role);
        if self.password_hasher.needs_rehash(user.password_hash.as_str()) {
            self.upgrade_password(&principal, &command.password).await?;
        }

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: id,
                email: user.email.clone(),
                role: user.role,
            })
            .await?;
        tracing::info!(user = %id, "user signed in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        Ok(user)
    }
}
