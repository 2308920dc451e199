// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// An operation that needs a persisted entity was handed one without an id.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
