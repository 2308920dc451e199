// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, CommentId};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageSource;
use async_trait::async_trait;

/// Every comment, newest (highest id) first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentQuery;

#[async_trait]
pub trait CommentRepository: PageSource<CommentQuery, Comment> {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn insert_or_update(&self, comment: Comment) -> DomainResult<Comment>;

    async fn remove(&self, id: CommentId) -> DomainResult<()>;
}
