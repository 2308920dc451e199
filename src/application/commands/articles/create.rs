// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContent, ArticleStatus, ArticleTitle},
        category::CategoryId,
        user::Principal,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub status: Option<ArticleStatus>,
}

impl ArticleCommandService {
    /// Draft a new article authored by `principal`.
    pub async fn create_article(
        &self,
        principal: &Principal,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let author = principal
            .user_id()
            .ok_or_else(|| ApplicationError::unauthorized("sign in to write articles"))?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let category_id = CategoryId::new(command.category_id)?;
        self.ensure_category_exists(category_id).await?;

        let now = self.clock.now();
        let mut article = Article::draft(title, content, category_id, author, now);
        if let Some(status) = command.status {
            article.set_status(status, now);
        }

        let created = self.save(article).await?;
        tracing::info!(author = %author, article = ?created.id, "article created");
        Ok(created.into())
    }

    pub(super) async fn ensure_category_exists(
        &self,
        category_id: CategoryId,
    ) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("category not found")),
        }
    }
}
