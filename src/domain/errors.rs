// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A workflow rule was broken, e.g. toggling a published article.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// The store refused a write because a row changed underneath it.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The store could not be reached or returned an unreadable row.
    #[error("persistence error: {0}")]
    Persistence(String),
}
