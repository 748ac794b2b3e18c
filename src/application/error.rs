// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A store read failed.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The operation would break a workflow invariant.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("no articles selected for publication")]
    EmptySelection,

    /// The publish write failed as a whole or in part. The selection is left as it was.
    #[error("publication failed: {0}")]
    Publication(String),

    #[error("store call timed out: {0}")]
    Timeout(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn publication(msg: impl Into<String>) -> Self {
        Self::Publication(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Maps an error raised by a store read. Persistence failures become `Fetch`.
    pub fn from_read(err: DomainError) -> Self {
        match err {
            DomainError::Persistence(msg) => Self::Fetch(msg),
            other => other.into(),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidState(msg) | DomainError::Conflict(msg) => Self::InvalidState(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
