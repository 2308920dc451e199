// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryRepository, CategoryTitle};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: Some(CategoryId::new(row.id)?),
            title: CategoryTitle::new(row.title)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, title FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, title FROM categories ORDER BY title, id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn insert_or_update(&self, category: Category) -> DomainResult<Category> {
        let row = match category.id {
            None => sqlx::query_as::<_, CategoryRow>(
                "INSERT INTO categories (title) VALUES ($1) RETURNING id, title",
            )
            .bind(category.title.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
            Some(id) => sqlx::query_as::<_, CategoryRow>(
                "UPDATE categories SET title = $2 WHERE id = $1 RETURNING id, title",
            )
            .bind(i64::from(id))
            .bind(category.title.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?,
        };

        Category::try_from(row)
    }

    async fn remove(&self, id: CategoryId) -> DomainResult<()> {
        // On delete the article foreign key can only fire because rows still
        // reference this category.
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| match map_sqlx(err) {
                DomainError::NotFound(_) => {
                    DomainError::Conflict("category still has articles".into())
                }
                other => other,
            })?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
