// src/application/queries/categories.rs
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleRepository,
        category::{CategoryId, CategoryRepository},
    },
};
use std::sync::Arc;

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    article_repo: Arc<dyn ArticleRepository>,
}

impl CategoryQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            category_repo,
            article_repo,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repo.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Number of articles filed under the category.
    pub async fn count_articles(&self, category_id: i64) -> ApplicationResult<u64> {
        let id = CategoryId::new(category_id)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        Ok(self.article_repo.count_by_category(id).await?)
    }
}
