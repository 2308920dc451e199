use crate::domain::comment::Comment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentDto {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub content: Option<String>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(Into::into),
            email: comment.email,
            nickname: comment.nickname,
            content: comment.content,
        }
    }
}
