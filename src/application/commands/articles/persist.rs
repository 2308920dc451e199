// src/application/commands/articles/persist.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleCommandService {
    /// Insert a new article or overwrite an existing one. Saving an existing
    /// article refreshes its `updated_at`.
    pub async fn save(&self, mut article: Article) -> ApplicationResult<Article> {
        if article.id.is_some() {
            article.touch(self.clock.now());
        }
        Ok(self.article_repo.insert_or_update(article).await?)
    }

    /// Hard delete. The article must already have an id.
    pub async fn delete(&self, article: &Article) -> ApplicationResult<()> {
        let id = article.persisted_id()?;
        self.article_repo.remove(id).await?;
        tracing::info!(article = %id, "article deleted");
        Ok(())
    }
}
