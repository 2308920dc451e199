// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, users::UserCommandService,
        },
        ports::{
            password_policy::CompromisedPasswordChecker,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::ArticleRepository, category::CategoryRepository, comment::CommentRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        compromised_passwords: Arc<dyn CompromisedPasswordChecker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&compromised_passwords),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&article_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(Arc::clone(&comment_repo)));
        let comment_queries = Arc::new(CommentQueryService::new(comment_repo));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            comment_commands,
            comment_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
