// src/application/commands/categories.rs
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{Category, CategoryRepository, CategoryTitle},
        user::Principal,
    },
};
use std::sync::Arc;

pub struct CreateCategoryCommand {
    pub title: String,
}

pub struct CategoryCommandService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn create_category(
        &self,
        principal: &Principal,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        if principal.as_user().is_none() {
            return Err(ApplicationError::unauthorized("sign in to create categories"));
        }

        let title = CategoryTitle::new(command.title)?;
        let category = self
            .category_repo
            .insert_or_update(Category::new(title))
            .await?;
        Ok(category.into())
    }
}
