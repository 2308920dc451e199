use crate::domain::article::{
    entity::{Article, ListedArticle},
    query::ArticleQuery,
    value_objects::ArticleId,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageSource;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Article store. Paging runs through [`PageSource`] over a composed
/// [`ArticleQuery`]; every call is atomic on its own.
#[async_trait]
pub trait ArticleRepository: PageSource<ArticleQuery, ListedArticle> {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_all(&self) -> DomainResult<Vec<Article>>;

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;

    /// Insert when `article.id` is `None`, otherwise update the mutable
    /// columns. `author_id` and `created_at` are never rewritten.
    async fn insert_or_update(&self, article: Article) -> DomainResult<Article>;

    async fn remove(&self, id: ArticleId) -> DomainResult<()>;
}
