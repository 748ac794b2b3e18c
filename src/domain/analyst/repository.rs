use crate::domain::analyst::entity::{Analyst, NewAnalyst};
use crate::domain::analyst::value_objects::Email;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AnalystRepository: Send + Sync {
    async fn insert(&self, analyst: NewAnalyst) -> DomainResult<Analyst>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Analyst>>;
}
