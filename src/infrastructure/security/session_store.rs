use crate::application::{
    dto::Session,
    error::{ApplicationError, ApplicationResult},
    ports::{session::SessionStore, time::Clock},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Process-local session table keyed by bearer token.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }

    /// Drops every session expired at `now` and returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> ApplicationResult<usize> {
        let mut table = self.table()?;
        let before = table.len();
        table.retain(|_, session| !session.is_expired(now));
        Ok(before - table.len())
    }

    /// Runs `purge_expired` on every tick of `every` until the task is dropped.
    pub async fn purge_periodically(self: Arc<Self>, clock: Arc<dyn Clock>, every: Duration) {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match self.purge_expired(clock.now()) {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "purged expired sessions"),
                Err(err) => tracing::warn!(error = %err, "session purge failed"),
            }
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> ApplicationResult<()> {
        self.table()?.insert(session.token.clone(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> ApplicationResult<Option<Session>> {
        Ok(self.table()?.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> ApplicationResult<Option<Session>> {
        Ok(self.table()?.remove(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analyst::{AnalystId, Email};
    use chrono::Duration;

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn session(token: &str, expires_at: DateTime<Utc>) -> Session {
        Session {
            id: format!("sid-{token}"),
            token: token.into(),
            analyst_id: AnalystId(1),
            email: Email::new("analyst@example.com").unwrap(),
            display_name: None,
            issued_at: expires_at - Duration::hours(1),
            expires_at,
        }
    }

    #[tokio::test]
    async fn insert_get_remove() {
        let store = InMemorySessionStore::new();
        let now = Utc::now();
        store.insert(session("abc", now + Duration::hours(1))).await.unwrap();
        assert!(store.get("abc").await.unwrap().is_some());
        assert!(store.remove("abc").await.unwrap().is_some());
        assert!(store.get("abc").await.unwrap().is_none());
        assert!(store.remove("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn purge_drops_only_expired() {
        let store = InMemorySessionStore::new();
        let now = Utc::now();
        store.insert(session("old", now - Duration::minutes(1))).await.unwrap();
        store.insert(session("live", now + Duration::minutes(1))).await.unwrap();
        assert_eq!(store.purge_expired(now).unwrap(), 1);
        assert!(store.get("live").await.unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_purge_evicts_expired_sessions() {
        let store = Arc::new(InMemorySessionStore::new());
        let now = Utc::now();
        store.insert(session("old", now - Duration::minutes(1))).await.unwrap();
        store.insert(session("live", now + Duration::minutes(1))).await.unwrap();

        let task = tokio::spawn(
            Arc::clone(&store)
                .purge_periodically(Arc::new(StoppedClock(now)), std::time::Duration::from_secs(60)),
        );
        tokio::time::sleep(std::time::Duration::from_secs(61)).await;
        task.abort();

        assert!(store.get("old").await.unwrap().is_none());
        assert!(store.get("live").await.unwrap().is_some());
    }
}
