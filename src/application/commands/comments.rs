// src/application/commands/comments.rs
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        user::Principal,
    },
};
use std::sync::Arc;

pub struct CreateCommentCommand {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub content: Option<String>,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentCommandService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// Anyone, signed in or not, may leave a comment.
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let comment = Comment::new(command.email, command.nickname, command.content)?;
        let saved = self.save(comment).await?;
        Ok(saved.into())
    }

    pub async fn delete_comment(&self, principal: &Principal, id: i64) -> ApplicationResult<()> {
        if !principal.is_admin() {
            return Err(ApplicationError::access_denied());
        }

        let id = CommentId::new(id)?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        self.delete(&comment).await
    }

    pub async fn save(&self, comment: Comment) -> ApplicationResult<Comment> {
        Ok(self.comment_repo.insert_or_update(comment).await?)
    }

    pub async fn delete(&self, comment: &Comment) -> ApplicationResult<()> {
        let id = comment.persisted_id()?;
        self.comment_repo.remove(id).await?;
        tracing::info!(comment = %id.0, "comment deleted");
        Ok(())
    }
}
