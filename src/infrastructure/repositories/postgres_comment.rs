// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, to_count};
use crate::domain::comment::{Comment, CommentId, CommentQuery, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageSource;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    email: Option<String>,
    nickname: Option<String>,
    content: Option<String>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: Some(CommentId::new(row.id)?),
            email: row.email,
            nickname: row.nickname,
            content: row.content,
        })
    }
}

#[async_trait]
impl PageSource<CommentQuery, Comment> for PostgresCommentRepository {
    async fn count(&self, _query: &CommentQuery) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn slice(
        &self,
        _query: &CommentQuery,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, email, nickname, content FROM comments
             ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, email, nickname, content FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn insert_or_update(&self, comment: Comment) -> DomainResult<Comment> {
        let row = match comment.id {
            None => sqlx::query_as::<_, CommentRow>(
                "INSERT INTO comments (email, nickname, content) VALUES ($1, $2, $3)
                 RETURNING id, email, nickname, content",
            )
            .bind(comment.email)
            .bind(comment.nickname)
            .bind(comment.content)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
            Some(id) => sqlx::query_as::<_, CommentRow>(
                "UPDATE comments SET email = $2, nickname = $3, content = $4 WHERE id = $1
                 RETURNING id, email, nickname, content",
            )
            .bind(i64::from(id))
            .bind(comment.email)
            .bind(comment.nickname)
            .bind(comment.content)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?,
        };

        Comment::try_from(row)
    }

    async fn remove(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
