// src/domain/article/mod.rs
pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;
pub mod voter;

pub use entity::{Article, ListedArticle};
pub use query::{
    ArticleOrder, ArticleQuery, ArticleScope, compose_admin_article_query, compose_article_query,
};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleTitle};
pub use voter::{ArticleAction, Vote, decide, vote};
