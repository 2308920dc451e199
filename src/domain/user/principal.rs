// src/domain/user/principal.rs
use crate::domain::user::value_objects::{Email, Role, UserId};

/// Who is making the current request. Passed explicitly into every listing,
/// authorization and credential operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Principal {
    #[default]
    Anonymous,
    /// A signed-in account backed by a stored password.
    User(UserPrincipal),
    /// A non-interactive caller (maintenance job, integration). It has no
    /// password credential and owns no articles.
    Service { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrincipal {
    pub id: UserId,
    pub email: Email,
    pub role: Role,
}

impl Principal {
    pub fn user(id: UserId, email: Email, role: Role) -> Self {
        Self::User(UserPrincipal { id, email, role })
    }

    pub fn service(name: impl Into<String>) -> Self {
        Self::Service { name: name.into() }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn as_user(&self) -> Option<&UserPrincipal> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.as_user().map(|user| user.id)
    }

    pub fn is_admin(&self) -> bool {
        self.as_user().is_some_and(|user| user.role == Role::Admin)
    }
}
