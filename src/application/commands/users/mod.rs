// src/application/commands/users/mod.rs
mod change_password;
mod login;
mod password;
mod persist;
mod register;
mod service;
mod upgrade;

pub use change_password::{ChangePasswordCommand, CredentialChange, CredentialChangeState};
pub use login::{LoginResult, LoginUserCommand};
pub use password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
