// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// `author_id` and `created_at` are fixed when the article is drafted; the
/// store never rewrites them on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn draft(
        title: ArticleTitle,
        content: ArticleContent,
        category_id: CategoryId,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title,
            content,
            status: ArticleStatus::Draft,
            category_id,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_content(&mut self, title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.touch(now);
    }

    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        self.status = status;
        self.touch(now);
    }

    pub fn move_to(&mut self, category_id: CategoryId, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.touch(now);
    }

    /// Refresh `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn persisted_id(&self) -> DomainResult<ArticleId> {
        self.id.ok_or_else(|| {
            DomainError::InvalidIdentity("cannot delete an article that does not exist".into())
        })
    }
}

/// One row of an article listing. `category` is filled when the query joins it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedArticle {
    pub article: Article,
    pub category: Option<Category>,
}
