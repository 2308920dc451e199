// tests/support/mocks/repos.rs
use async_trait::async_trait;
use quire::domain::errors::{DomainError, DomainResult};
use quire::domain::pagination::PageSource;
use quire::domain::user::{Email, PasswordHash, User, UserId, UserQuery, UserRepository};
use quire::infrastructure::repositories::InMemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Delegates to the in-memory store, except that credential writes can be
/// made to fail. Counts every write that reaches it.
pub struct FlakyUserRepo {
    inner: Arc<InMemoryStore>,
    fail_password_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyUserRepo {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self {
            inner,
            fail_password_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn fail_password_writes(&self) {
        self.fail_password_writes.store(true, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource<UserQuery, User> for FlakyUserRepo {
    async fn count(&self, query: &UserQuery) -> DomainResult<u64> {
        PageSource::<UserQuery, User>::count(self.inner.as_ref(), query).await
    }

    async fn slice(&self, query: &UserQuery, offset: u64, limit: u32) -> DomainResult<Vec<User>> {
        PageSource::<UserQuery, User>::slice(self.inner.as_ref(), query, offset, limit).await
    }
}

#[async_trait]
impl UserRepository for FlakyUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        UserRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.inner.find_by_email(email).await
    }

    async fn insert_or_update(&self, user: User) -> DomainResult<User> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        UserRepository::insert_or_update(self.inner.as_ref(), user).await
    }

    async fn insert_first_user(&self, user: User) -> DomainResult<Option<User>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_first_user(user).await
    }

    async fn remove(&self, id: UserId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        UserRepository::remove(self.inner.as_ref(), id).await
    }

    async fn update_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_password_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        self.inner.update_password_hash(id, hash).await
    }
}
