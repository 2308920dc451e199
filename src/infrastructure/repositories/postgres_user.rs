// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, to_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageSource;
use crate::domain::user::{Email, PasswordHash, User, UserId, UserQuery, UserRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: Some(UserId::new(row.id)?),
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse()?,
        })
    }
}

#[async_trait]
impl PageSource<UserQuery, User> for PostgresUserRepository {
    async fn count(&self, _query: &UserQuery) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }

    async fn slice(&self, _query: &UserQuery, offset: u64, limit: u32) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, role FROM users
             ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, role FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, role FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn insert_or_update(&self, user: User) -> DomainResult<User> {
        let row = match user.id {
            None => sqlx::query_as::<_, UserRow>(
                "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3)
                 RETURNING id, email, password_hash, role",
            )
            .bind(user.email.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
            Some(id) => sqlx::query_as::<_, UserRow>(
                "UPDATE users SET email = $2, password_hash = $3, role = $4 WHERE id = $1
                 RETURNING id, email, password_hash, role",
            )
            .bind(i64::from(id))
            .bind(user.email.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.role.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?,
        };

        User::try_from(row)
    }

    async fn insert_first_user(&self, user: User) -> DomainResult<Option<User>> {
        // The table lock serialises concurrent bootstrap attempts so NOT EXISTS
        // sees the winner's row.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash, role)
             SELECT $1, $2, $3
             WHERE NOT EXISTS (SELECT 1 FROM users)
             RETURNING id, email, password_hash, role",
        )
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.role.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }

    async fn remove(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn update_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(hash.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}
