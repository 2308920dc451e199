// src/domain/comment/entity.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

const MAX_SHORT_FIELD: usize = 64;

/// A moderation-queue entry left by an anonymous visitor. Not linked to any article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub id: Option<CommentId>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub content: Option<String>,
}

impl Comment {
    /// Blank strings are stored as absent. The email is kept as typed.
    pub fn new(
        email: Option<String>,
        nickname: Option<String>,
        content: Option<String>,
    ) -> DomainResult<Self> {
        let email = non_blank(email);
        let nickname = non_blank(nickname);
        check_length("email", email.as_deref())?;
        check_length("nickname", nickname.as_deref())?;

        Ok(Self {
            id: None,
            email,
            nickname,
            content: non_blank(content),
        })
    }

    pub fn persisted_id(&self) -> DomainResult<CommentId> {
        self.id.ok_or_else(|| {
            DomainError::InvalidIdentity("cannot delete a comment that does not exist".into())
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn check_length(field: &str, value: Option<&str>) -> DomainResult<()> {
    match value {
        Some(v) if v.chars().count() > MAX_SHORT_FIELD => Err(DomainError::Validation(format!(
            "{field} must be at most {MAX_SHORT_FIELD} characters"
        ))),
        _ => Ok(()),
    }
}
