// src/application/timeout.rs
use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainResult;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Upper bound applied to every store call made by an application service.
///
/// An expired call is reported as `ApplicationError::Timeout`. The caller must
/// treat it as "did not happen" and leave any in-memory state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreDeadline {
    limit: Duration,
}

impl Default for StoreDeadline {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_TIMEOUT)
    }
}

impl StoreDeadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// Reads map store failures to `ApplicationError::Fetch`.
    pub async fn read<T, F>(&self, operation: &'static str, call: F) -> ApplicationResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        self.bounded(operation, call)
            .await?
            .map_err(ApplicationError::from_read)
    }

    pub async fn write<T, F>(&self, operation: &'static str, call: F) -> ApplicationResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        self.bounded(operation, call).await?.map_err(Into::into)
    }

    /// Only the deadline is mapped; the store outcome is handed back untouched.
    pub async fn bounded<T, F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> ApplicationResult<DomainResult<T>>
    where
        F: Future<Output = DomainResult<T>>,
    {
        timeout(self.limit, call).await.map_err(|_| {
            tracing::warn!(operation, limit_ms = self.limit.as_millis() as u64, "store call timed out");
            ApplicationError::timeout(format!(
                "{operation} did not complete within {}ms",
                self.limit.as_millis()
            ))
        })
    }
}
