use crate::application::{ApplicationResult, dto::Session};
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session) -> ApplicationResult<()>;

    async fn get(&self, token: &str) -> ApplicationResult<Option<Session>>;

    /// Removes and returns the session, if it existed.
    async fn remove(&self, token: &str) -> ApplicationResult<Option<Session>>;
}
