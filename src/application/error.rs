// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// Hidden from public reads: either absent or not yet published.
    #[error("not published: {0}")]
    NotPublished(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn not_published(msg: impl Into<String>) -> Self {
        Self::NotPublished(msg.into())
    }

    /// True for both application-level and resolver/store `NotFound` failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
        )
    }
}
