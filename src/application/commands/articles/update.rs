// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleAction, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, decide},
        category::CategoryId,
        user::Principal,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        principal: &Principal,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !decide(ArticleAction::Edit, &article, principal) {
            tracing::debug!(article = %id, "edit denied");
            return Err(ApplicationError::access_denied());
        }

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            status,
            category_id,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;
        let category_id = category_id.map(CategoryId::new).transpose()?;
        let now = self.clock.now();

        if title.is_some() || content.is_some() {
            let title = title.unwrap_or_else(|| article.title.clone());
            let content = content.unwrap_or_else(|| article.content.clone());
            article.set_content(title, content, now);
        }

        if let Some(category_id) = category_id {
            self.ensure_category_exists(category_id).await?;
            article.move_to(category_id, now);
        }

        if let Some(status) = status {
            article.set_status(status, now);
        }

        let updated = self.save(article).await?;
        Ok(updated.into())
    }
}
