// src/application/commands/users/register.rs
use super::{UserCommandService, change_password::rehash, password::check_new_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        user::{Email, Principal, Role, User, UserQuery},
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The very first account is created as an administrator by anyone; after
    /// that only an administrator may register users. Claiming the first seat
    /// is atomic in the store, so concurrent anonymous registrations yield
    /// exactly one administrator.
    pub async fn register(
        &self,
        principal: &Principal,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let existing = self.user_repo.count(&UserQuery).await?;
        let role = determine_role(existing, principal, command.role)?;

        let mut errors = FieldErrors::default();
        check_new_password(
            self.compromised_passwords.as_ref(),
            "password",
            &command.password,
            &mut errors,
        )
        .await?;
        errors.into_result()?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hash = rehash(self.password_hasher.as_ref(), &command.password).await?;
        let user = if principal.is_admin() {
            self.save(User::new(email, hash, role)).await?
        } else {
            // Another registration may have claimed the admin seat since the
            // count above; the store decides.
            self.user_repo
                .insert_first_user(User::new(email, hash, Role::Admin))
                .await?
                .ok_or_else(ApplicationError::access_denied)?
        };
        tracing::info!(user = ?user.id, role = %user.role, "user registered");
        Ok(user.into())
    }
}

fn determine_role(
    existing: u64,
    principal: &Principal,
    requested: Option<Role>,
) -> ApplicationResult<Role> {
    if existing == 0 {
        return Ok(Role::Admin);
    }
    if !principal.is_admin() {
        return Err(ApplicationError::access_denied());
    }
    Ok(requested.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    fn admin() -> Principal {
        Principal::user(
            UserId::new(1).unwrap(),
            Email::new("admin@example.com").unwrap(),
            Role::Admin,
        )
    }

    #[test]
    fn first_account_is_admin() {
        assert_eq!(
            determine_role(0, &Principal::Anonymous, None).unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn later_accounts_need_an_admin() {
        assert!(matches!(
            determine_role(1, &Principal::Anonymous, None),
            Err(ApplicationError::Forbidden(_))
        ));
        assert_eq!(determine_role(1, &admin(), None).unwrap(), Role::Author);
        assert_eq!(
            determine_role(1, &admin(), Some(Role::Admin)).unwrap(),
            Role::Admin
        );
    }
}
