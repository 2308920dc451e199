// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    /// Ordered by title.
    async fn find_all(&self) -> DomainResult<Vec<Category>>;

    async fn insert_or_update(&self, category: Category) -> DomainResult<Category>;

    async fn remove(&self, id: CategoryId) -> DomainResult<()>;
}
