use crate::domain::article::entity::{Article, ArticleFlagsUpdate};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Articles with a non-empty title, selected ones first.
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
    /// Unknown ids are skipped; the result is not guaranteed to follow `ids` order.
    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::NotFound` when the article does not exist.
    async fn update_flags(&self, update: ArticleFlagsUpdate) -> DomainResult<Article>;
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}
