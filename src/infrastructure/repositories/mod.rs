// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_category;
mod postgres_comment;
mod postgres_user;

pub use error::map_sqlx;
use error::to_count;
pub use memory::InMemoryStore;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_user::PostgresUserRepository;
