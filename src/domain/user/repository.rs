// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageSource;
use crate::domain::user::{
    entity::User,
    value_objects::{Email, PasswordHash, UserId},
};
use async_trait::async_trait;

/// Every user, ordered by id ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQuery;

#[async_trait]
pub trait UserRepository: PageSource<UserQuery, User> {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Insert when `user.id` is `None`, otherwise overwrite the stored row.
    async fn insert_or_update(&self, user: User) -> DomainResult<User>;

    /// Insert `user` only while the table is empty, as one atomic step.
    /// Returns `None` when any account already exists.
    async fn insert_first_user(&self, user: User) -> DomainResult<Option<User>>;

    async fn remove(&self, id: UserId) -> DomainResult<()>;

    /// Replace only the stored credential of an existing user.
    async fn update_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()>;
}
