// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleAction, ArticleId, decide},
        user::Principal,
    },
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        principal: &Principal,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !decide(ArticleAction::Delete, &article, principal) {
            tracing::debug!(article = %id, "delete denied");
            return Err(ApplicationError::access_denied());
        }

        self.delete(&article).await
    }
}
