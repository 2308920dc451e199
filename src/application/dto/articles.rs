use crate::domain::article::{Article, ArticleStatus, ListedArticle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_title: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(Into::into),
            title: article.title.into(),
            content: article.content.into(),
            status: article.status,
            category_id: article.category_id.into(),
            category_title: None,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ListedArticle> for ArticleDto {
    fn from(listed: ListedArticle) -> Self {
        let category_title = listed.category.map(|category| category.title.into());
        Self {
            category_title,
            ..Self::from(listed.article)
        }
    }
}
