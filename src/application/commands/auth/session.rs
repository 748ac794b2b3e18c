use super::AuthService;
use crate::application::{
    dto::{Session, SessionEvent},
    error::{ApplicationError, ApplicationResult},
};

impl AuthService {
    /// Looks up a live session. Expired sessions are dropped from the store.
    pub async fn get_session(&self, token: &str) -> ApplicationResult<Option<Session>> {
        let Some(session) = self.sessions.get(token).await? else {
            return Ok(None);
        };
        if session.is_expired(self.clock.now()) {
            self.sessions.remove(token).await?;
            tracing::debug!(session_id = %session.id, "expired session purged");
            return Ok(None);
        }
        Ok(Some(session))
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<Session> {
        self.get_session(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("session missing or expired"))
    }

    /// Ends the session. Signing out an unknown token is a no-op.
    pub async fn sign_out(&self, token: &str) -> ApplicationResult<()> {
        if let Some(session) = self.sessions.remove(token).await? {
            tracing::info!(session_id = %session.id, "analyst signed out");
            self.emit(SessionEvent::SignedOut {
                session_id: session.id,
                email: session.email,
            });
        }
        Ok(())
    }
}
