// src/infrastructure/repositories/memory.rs
//! Process-local store backing `STORAGE=memory` and the test suite. It honours
//! the same ordering, scoping and identity rules as the Postgres repositories.

use crate::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleRepository, ArticleScope, ListedArticle,
    compose_article_query,
};
use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::comment::{Comment, CommentId, CommentQuery, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageSource;
use crate::domain::user::{Email, PasswordHash, User, UserId, UserQuery, UserRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn scoped_articles(&self, query: &ArticleQuery) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self
            .articles
            .values()
            .filter(|article| query.matches(article))
            .collect();
        articles.sort_by(|a, b| query.compare(a, b));
        articles
    }
}

/// Each call takes the lock once, so every operation is atomic on its own.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }
}

fn window<T: Clone>(items: Vec<&T>, offset: u64, limit: u32) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    items
        .into_iter()
        .skip(offset)
        .take(limit as usize)
        .cloned()
        .collect()
}

fn len_u64(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[async_trait]
impl PageSource<ArticleQuery, ListedArticle> for InMemoryStore {
    async fn count(&self, query: &ArticleQuery) -> DomainResult<u64> {
        let tables = self.lock()?;
        Ok(len_u64(tables.scoped_articles(query).len()))
    }

    async fn slice(
        &self,
        query: &ArticleQuery,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<ListedArticle>> {
        let tables = self.lock()?;
        let articles = window(tables.scoped_articles(query), offset, limit);
        Ok(articles
            .into_iter()
            .map(|article| {
                let category = if query.joins_category() {
                    tables.categories.get(&article.category_id.0).cloned()
                } else {
                    None
                };
                ListedArticle { article, category }
            })
            .collect())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.lock()?.articles.get(&id.0).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let query = compose_article_query(ArticleScope::All);
        let tables = self.lock()?;
        Ok(tables.scoped_articles(&query).into_iter().cloned().collect())
    }

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let query = compose_article_query(ArticleScope::ByAuthor(author_id));
        let tables = self.lock()?;
        Ok(tables.scoped_articles(&query).into_iter().cloned().collect())
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let tables = self.lock()?;
        Ok(len_u64(
            tables
                .articles
                .values()
                .filter(|article| article.category_id == category_id)
                .count(),
        ))
    }

    async fn insert_or_update(&self, mut article: Article) -> DomainResult<Article> {
        let mut tables = self.lock()?;
        if !tables.categories.contains_key(&article.category_id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }

        match article.id {
            None => {
                if !tables.users.contains_key(&article.author_id.0) {
                    return Err(DomainError::NotFound("author not found".into()));
                }
                let id = ArticleId::new(tables.allocate_id())?;
                article.id = Some(id);
            }
            Some(id) => {
                let stored = tables
                    .articles
                    .get(&id.0)
                    .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
                article.author_id = stored.author_id;
                article.created_at = stored.created_at;
                article.updated_at = article.updated_at.max(stored.created_at);
            }
        }

        let id = article.persisted_id()?;
        tables.articles.insert(id.0, article.clone());
        Ok(article)
    }

    async fn remove(&self, id: ArticleId) -> DomainResult<()> {
        self.lock()?
            .articles
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.lock()?.categories.get(&id.0).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.lock()?.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn insert_or_update(&self, mut category: Category) -> DomainResult<Category> {
        let mut tables = self.lock()?;
        let duplicate = tables
            .categories
            .values()
            .any(|other| other.id != category.id && other.title == category.title);
        if duplicate {
            return Err(DomainError::Conflict("category already exists".into()));
        }

        let id = match category.id {
            None => CategoryId::new(tables.allocate_id())?,
            Some(id) if tables.categories.contains_key(&id.0) => id,
            Some(_) => return Err(DomainError::NotFound("category not found".into())),
        };
        category.id = Some(id);
        tables.categories.insert(id.0, category.clone());
        Ok(category)
    }

    async fn remove(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.lock()?;
        if !tables.categories.contains_key(&id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if tables.articles.values().any(|article| article.category_id == id) {
            return Err(DomainError::Conflict("category still has articles".into()));
        }
        tables.categories.remove(&id.0);
        Ok(())
    }
}

#[async_trait]
impl PageSource<CommentQuery, Comment> for InMemoryStore {
    async fn count(&self, _query: &CommentQuery) -> DomainResult<u64> {
        Ok(len_u64(self.lock()?.comments.len()))
    }

    async fn slice(
        &self,
        _query: &CommentQuery,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Comment>> {
        let tables = self.lock()?;
        Ok(window(tables.comments.values().rev().collect(), offset, limit))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.lock()?.comments.get(&id.0).cloned())
    }

    async fn insert_or_update(&self, mut comment: Comment) -> DomainResult<Comment> {
        let mut tables = self.lock()?;
        let id = match comment.id {
            None => CommentId::new(tables.allocate_id())?,
            Some(id) if tables.comments.contains_key(&id.0) => id,
            Some(_) => return Err(DomainError::NotFound("comment not found".into())),
        };
        comment.id = Some(id);
        tables.comments.insert(id.0, comment.clone());
        Ok(comment)
    }

    async fn remove(&self, id: CommentId) -> DomainResult<()> {
        self.lock()?
            .comments
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

#[async_trait]
impl PageSource<UserQuery, User> for InMemoryStore {
    async fn count(&self, _query: &UserQuery) -> DomainResult<u64> {
        Ok(len_u64(self.lock()?.users.len()))
    }

    async fn slice(&self, _query: &UserQuery, offset: u64, limit: u32) -> DomainResult<Vec<User>> {
        let tables = self.lock()?;
        Ok(window(tables.users.values().collect(), offset, limit))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn insert_or_update(&self, mut user: User) -> DomainResult<User> {
        let mut tables = self.lock()?;
        let duplicate = tables
            .users
            .values()
            .any(|other| other.id != user.id && other.email == user.email);
        if duplicate {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let id = match user.id {
            None => UserId::new(tables.allocate_id())?,
            Some(id) if tables.users.contains_key(&id.0) => id,
            Some(_) => return Err(DomainError::NotFound("user not found".into())),
        };
        user.id = Some(id);
        tables.users.insert(id.0, user.clone());
        Ok(user)
    }

    async fn insert_first_user(&self, mut user: User) -> DomainResult<Option<User>> {
        let mut tables = self.lock()?;
        if !tables.users.is_empty() {
            return Ok(None);
        }
        let id = UserId::new(tables.allocate_id())?;
        user.id = Some(id);
        tables.users.insert(id.0, user.clone());
        Ok(Some(user))
    }

    async fn remove(&self, id: UserId) -> DomainResult<()> {
        let mut tables = self.lock()?;
        if tables.users.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("user not found".into()));
        }
        tables.articles.retain(|_, article| article.author_id != id);
        Ok(())
    }

    async fn update_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let user = tables
            .users
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_password(hash.clone());
        Ok(())
    }
}
