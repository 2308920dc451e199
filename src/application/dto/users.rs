use crate::domain::user::{Role, User};
use serde::{Deserialize, Serialize};

/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub id: Option<i64>,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(Into::into),
            email: user.email.into(),
            role: user.role,
        }
    }
}
