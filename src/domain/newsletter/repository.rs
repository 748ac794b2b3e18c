use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter};
use crate::domain::newsletter::value_objects::NewsletterId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterReadRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Newsletter>>;
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>>;
}

#[async_trait]
pub trait NewsletterWriteRepository: Send + Sync {
    /// Creates the newsletter and marks every referenced article as published in it.
    /// Both writes succeed together or the call fails without effect.
    async fn publish(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;
    async fn increment_views(&self, id: NewsletterId) -> DomainResult<()>;
}
