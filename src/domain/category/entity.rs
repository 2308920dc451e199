// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTitle(String);

impl CategoryTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("category title cannot be empty".into()));
        }
        if value.chars().count() > 64 {
            return Err(DomainError::Validation(
                "category title must be at most 64 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryTitle> for String {
    fn from(value: CategoryTitle) -> Self {
        value.0
    }
}

/// Articles point at a category; the category does not own them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Option<CategoryId>,
    pub title: CategoryTitle,
}

impl Category {
    pub fn new(title: CategoryTitle) -> Self {
        Self { id: None, title }
    }

    pub fn persisted_id(&self) -> DomainResult<CategoryId> {
        self.id.ok_or_else(|| {
            DomainError::InvalidIdentity("cannot delete a category that does not exist".into())
        })
    }
}
