// src/application/commands/users/change_password.rs
//! Verify-then-rehash password change for the signed-in user.
//!
//! Nothing is written unless the current password verifies and the new one
//! passes every rule. The hash is replaced through a single store call; if
//! that call fails the change is not accepted.

use super::{UserCommandService, password::check_new_password};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::security::PasswordHasher,
    },
    domain::user::{PasswordHash, Principal, User, UserPrincipal},
};

pub const CURRENT_PASSWORD_FIELD: &str = "current_password";
pub const NEW_PASSWORD_FIELD: &str = "new_password";

pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialChangeState {
    #[default]
    Idle,
    AwaitingInput,
    Validating,
    Accepted,
    RejectedCurrentPasswordInvalid,
    RejectedNewPasswordInvalid,
}

impl CredentialChangeState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Accepted | Self::RejectedCurrentPasswordInvalid | Self::RejectedNewPasswordInvalid
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingInput => "awaiting_input",
            Self::Validating => "validating",
            Self::Accepted => "accepted",
            Self::RejectedCurrentPasswordInvalid => "rejected_current_password_invalid",
            Self::RejectedNewPasswordInvalid => "rejected_new_password_invalid",
        }
    }
}

/// One run of the workflow. Transitions only move forward; a terminal state
/// never changes again.
#[derive(Debug, Default)]
pub struct CredentialChange {
    state: CredentialChangeState,
}

impl CredentialChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CredentialChangeState {
        self.state
    }

    /// A principal able to hold a password opened the form.
    pub fn open(&mut self) {
        self.advance(CredentialChangeState::Idle, CredentialChangeState::AwaitingInput);
    }

    pub fn submit(&mut self) {
        self.advance(
            CredentialChangeState::AwaitingInput,
            CredentialChangeState::Validating,
        );
    }

    pub fn reject_new_password(&mut self) {
        self.advance(
            CredentialChangeState::Validating,
            CredentialChangeState::RejectedNewPasswordInvalid,
        );
    }

    pub fn reject_current_password(&mut self) {
        self.advance(
            CredentialChangeState::Validating,
            CredentialChangeState::RejectedCurrentPasswordInvalid,
        );
    }

    pub fn accept(&mut self) {
        self.advance(CredentialChangeState::Validating, CredentialChangeState::Accepted);
    }

    fn advance(&mut self, from: CredentialChangeState, to: CredentialChangeState) {
        if self.state == from {
            self.state = to;
        }
    }
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        principal: &Principal,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let actor = password_principal(principal)?;
        let mut change = CredentialChange::new();
        change.open();

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        change.submit();
        let result = self.run_change(&mut change, &user, command).await;

        match change.state() {
            CredentialChangeState::Accepted => {
                tracing::info!(user = %actor.id, "password changed");
            }
            state if state.is_terminal() => {
                tracing::warn!(user = %actor.id, outcome = state.as_str(), "password change rejected");
            }
            _ => {
                tracing::warn!(user = %actor.id, "password change aborted");
            }
        }

        result
    }

    async fn run_change(
        &self,
        change: &mut CredentialChange,
        user: &User,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let errors = self.validate_form(&command).await?;
        if !errors.is_empty() {
            change.reject_new_password();
            return Err(ApplicationError::ValidationFailed(errors));
        }

        let verified = self
            .password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await?;
        if !verified {
            change.reject_current_password();
            return Err(ApplicationError::CredentialMismatch {
                field: CURRENT_PASSWORD_FIELD,
            });
        }

        let hash = rehash(self.password_hasher.as_ref(), &command.new_password).await?;
        let id = user.persisted_id()?;
        self.user_repo.update_password_hash(id, &hash).await?;

        change.accept();
        Ok(())
    }

    async fn validate_form(&self, command: &ChangePasswordCommand) -> ApplicationResult<FieldErrors> {
        let mut errors = FieldErrors::default();

        if command.current_password.trim().is_empty() {
            errors.push(CURRENT_PASSWORD_FIELD, "current password must not be blank");
        }

        check_new_password(
            self.compromised_passwords.as_ref(),
            NEW_PASSWORD_FIELD,
            &command.new_password,
            &mut errors,
        )
        .await?;

        if command.new_password != command.new_password_confirmation {
            errors.push(NEW_PASSWORD_FIELD, "password_mismatch");
        }

        Ok(errors)
    }
}

pub(super) fn password_principal(principal: &Principal) -> ApplicationResult<&UserPrincipal> {
    match principal {
        Principal::User(user) => Ok(user),
        Principal::Anonymous => Err(ApplicationError::unauthorized(
            "authentication is required to change a password",
        )),
        Principal::Service { name } => Err(ApplicationError::unsupported_principal(format!(
            "principal `{name}` does not authenticate with a password"
        ))),
    }
}

pub(super) async fn rehash(
    hasher: &dyn PasswordHasher,
    password: &str,
) -> ApplicationResult<PasswordHash> {
    let hashed = hasher.hash(password).await?;
    Ok(PasswordHash::new(hashed)?)
}
