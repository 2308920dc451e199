// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, to_count};
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleOrder, ArticleQuery, ArticleRepository,
    ArticleStatus, ArticleTitle, ListedArticle,
};
use crate::domain::category::{Category, CategoryId, CategoryTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageSource;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "a.id, a.title, a.content, a.status, a.category_id, a.author_id, a.created_at, a.updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    status: i16,
    category_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ListedArticleRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    category_title: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: Some(ArticleId::new(row.id)?),
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            status: ArticleStatus::from_code(row.status)?,
            category_id: CategoryId::new(row.category_id)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ListedArticleRow> for ListedArticle {
    type Error = DomainError;

    fn try_from(row: ListedArticleRow) -> Result<Self, Self::Error> {
        let category_id = row.article.category_id;
        let category = row
            .category_title
            .map(|title| -> DomainResult<Category> {
                Ok(Category {
                    id: Some(CategoryId::new(category_id)?),
                    title: CategoryTitle::new(title)?,
                })
            })
            .transpose()?;

        Ok(ListedArticle {
            article: Article::try_from(row.article)?,
            category,
        })
    }
}

impl PostgresArticleRepository {
    fn apply_scope(builder: &mut QueryBuilder<'_, Postgres>, query: &ArticleQuery) {
        if let Some(author) = query.author_filter() {
            builder.push(" WHERE a.author_id = ");
            builder.push_bind(i64::from(author));
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, order: ArticleOrder) {
        match order {
            ArticleOrder::UpdatedAtDesc => builder.push(" ORDER BY a.updated_at DESC, a.id DESC"),
            ArticleOrder::CreatedAtDesc => builder.push(" ORDER BY a.created_at DESC, a.id DESC"),
        };
    }

    async fn fetch_articles(&self, author: Option<UserId>) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        if let Some(author) = author {
            builder.push(" WHERE a.author_id = ");
            builder.push_bind(i64::from(author));
        }
        Self::apply_ordering(&mut builder, ArticleOrder::UpdatedAtDesc);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl PageSource<ArticleQuery, ListedArticle> for PostgresArticleRepository {
    async fn count(&self, query: &ArticleQuery) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles a");
        Self::apply_scope(&mut builder, query);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn slice(
        &self,
        query: &ArticleQuery,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<ListedArticle>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS}"));
        if query.joins_category() {
            builder.push(", c.title AS category_title FROM articles a");
            builder.push(" INNER JOIN categories c ON c.id = a.category_id");
        } else {
            builder.push(", NULL::TEXT AS category_title FROM articles a");
        }
        Self::apply_scope(&mut builder, query);
        Self::apply_ordering(&mut builder, query.order());
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ListedArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ListedArticle::try_from).collect()
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.fetch_articles(None).await
    }

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        self.fetch_articles(Some(author_id)).await
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles WHERE category_id = $1")
            .bind(i64::from(category_id))
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn insert_or_update(&self, article: Article) -> DomainResult<Article> {
        let row = match article.id {
            None => sqlx::query_as::<_, ArticleRow>(
                "INSERT INTO articles (title, content, status, category_id, author_id, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING id, title, content, status, category_id, author_id, created_at, updated_at",
            )
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.status.code())
            .bind(i64::from(article.category_id))
            .bind(i64::from(article.author_id))
            .bind(article.created_at)
            .bind(article.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
            Some(id) => sqlx::query_as::<_, ArticleRow>(
                "UPDATE articles
                 SET title = $2, content = $3, status = $4, category_id = $5,
                     updated_at = GREATEST($6, created_at)
                 WHERE id = $1
                 RETURNING id, title, content, status, category_id, author_id, created_at, updated_at",
            )
            .bind(i64::from(id))
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.status.code())
            .bind(i64::from(article.category_id))
            .bind(article.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?,
        };

        Article::try_from(row)
    }

    async fn remove(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
