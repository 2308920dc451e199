// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// `None` until the store assigns one.
    pub id: Option<UserId>,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl User {
    pub fn new(email: Email, password_hash: PasswordHash, role: Role) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    /// The id of an already persisted user; fails for a user never saved.
    pub fn persisted_id(&self) -> DomainResult<UserId> {
        self.id.ok_or_else(|| {
            DomainError::InvalidIdentity("cannot delete a user that does not exist".into())
        })
    }
}
