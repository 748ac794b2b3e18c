// src/application/commands/auth/service.rs
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::broadcast;

use crate::{
    application::{
        dto::SessionEvent,
        ports::{
            security::{PasswordHasher, SessionTokenGenerator},
            session::SessionStore,
            time::Clock,
        },
        timeout::StoreDeadline,
    },
    domain::analyst::AnalystRepository,
};

const EVENT_CAPACITY: usize = 64;

/// Sign-in, session lookup and sign-out for analysts.
pub struct AuthService {
    pub(super) analysts: Arc<dyn AnalystRepository>,
    pub(super) hasher: Arc<dyn PasswordHasher>,
    pub(super) tokens: Arc<dyn SessionTokenGenerator>,
    pub(super) sessions: Arc<dyn SessionStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) deadline: StoreDeadline,
    pub(super) session_ttl: Duration,
    pub(super) events: broadcast::Sender<SessionEvent>,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        analysts: Arc<dyn AnalystRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn SessionTokenGenerator>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        deadline: StoreDeadline,
        session_ttl: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            analysts,
            hasher,
            tokens,
            sessions,
            clock,
            deadline,
            session_ttl,
            events,
        }
    }

    /// Session-change notifications. Receivers only see events sent after subscribing.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(super) fn emit(&self, event: SessionEvent) {
        // No receivers is fine.
        let _ = self.events.send(event);
    }
}
