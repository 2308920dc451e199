// tests/support/builders.rs
use super::mocks::at;
use quire::domain::article::{Article, ArticleContent, ArticleStatus, ArticleTitle};
use quire::domain::category::CategoryId;
use quire::domain::user::UserId;

/// Builds an unsaved article with explicit timestamps (minutes after the fixed epoch).
pub struct ArticleBuilder {
    title: String,
    author_id: i64,
    category_id: i64,
    created: i64,
    updated: Option<i64>,
    status: ArticleStatus,
}

impl ArticleBuilder {
    pub fn new(author_id: UserId, category_id: CategoryId) -> Self {
        Self {
            title: "Test Article".into(),
            author_id: i64::from(author_id),
            category_id: i64::from(category_id),
            created: 0,
            updated: None,
            status: ArticleStatus::Draft,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created(mut self, minutes: i64) -> Self {
        self.created = minutes;
        self
    }

    pub fn updated(mut self, minutes: i64) -> Self {
        self.updated = Some(minutes);
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self
    }

    pub fn build(self) -> Article {
        let mut article = Article::draft(
            ArticleTitle::new(self.title).unwrap(),
            ArticleContent::new("Test body").unwrap(),
            CategoryId::new(self.category_id).unwrap(),
            UserId::new(self.author_id).unwrap(),
            at(self.created),
        );
        article.status = self.status;
        if let Some(updated) = self.updated {
            article.touch(at(updated));
        }
        article
    }
}
