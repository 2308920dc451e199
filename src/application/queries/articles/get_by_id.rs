use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleAction, ArticleId, decide},
        user::Principal,
    },
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article(
        &self,
        principal: &Principal,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !decide(ArticleAction::View, &article, principal) {
            tracing::debug!(article = %id, "view denied");
            return Err(ApplicationError::access_denied());
        }

        Ok(article.into())
    }
}
