// src/application/commands/users/password.rs
use crate::application::{error::FieldErrors, ports::password_policy::CompromisedPasswordChecker};
use crate::application::ApplicationResult;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Collects every rule `password` breaks under `field`. Length is counted in
/// characters, not bytes.
pub(super) async fn check_new_password(
    checker: &dyn CompromisedPasswordChecker,
    field: &'static str,
    password: &str,
    errors: &mut FieldErrors,
) -> ApplicationResult<()> {
    if password.is_empty() {
        errors.push(field, "password must not be blank");
        return Ok(());
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        errors.push(
            field,
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    } else if length > MAX_PASSWORD_LENGTH {
        errors.push(
            field,
            format!("password must be at most {MAX_PASSWORD_LENGTH} characters"),
        );
    } else if checker.is_compromised(password).await? {
        errors.push(field, "password appears in a list of leaked passwords");
    }

    Ok(())
}
