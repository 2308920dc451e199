// src/application/queries/comments.rs
use crate::{
    application::{
        dto::{CommentDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{Comment, CommentQuery, CommentRepository},
        pagination::{PageRequest, paginate},
        user::Principal,
    },
};
use std::sync::Arc;

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
}

pub struct ListCommentsQuery {
    pub page: PageRequest,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// The moderation queue is visible to admins only.
    pub async fn get_paginated_list(
        &self,
        principal: &Principal,
        query: ListCommentsQuery,
    ) -> ApplicationResult<PaginatedResult<CommentDto>> {
        if !principal.is_admin() {
            return Err(ApplicationError::access_denied());
        }

        let page =
            paginate::<_, Comment, _>(self.comment_repo.as_ref(), &CommentQuery, query.page).await?;
        Ok(PaginatedResult::from_page(page))
    }
}
