// src/application/commands/auth/sign_in.rs
use super::AuthService;
use crate::{
    application::{
        dto::{Session, SessionEvent},
        error::{ApplicationError, ApplicationResult},
    },
    domain::analyst::Email,
};
use uuid::Uuid;

impl AuthService {
    #[tracing::instrument(skip_all)]
    pub async fn sign_in(&self, email: &str, password: &str) -> ApplicationResult<Session> {
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }

        let analyst = self
            .deadline
            .read("find analyst", self.analysts.find_by_email(&email))
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.hasher
            .verify(password, analyst.password_hash.as_str())
            .await?;

        let issued_at = self.clock.now();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            token: self.tokens.generate()?,
            analyst_id: analyst.id,
            email: analyst.email,
            display_name: analyst.display_name,
            issued_at,
            expires_at: issued_at + self.session_ttl,
        };
        self.sessions.insert(session.clone()).await?;

        tracing::info!(session_id = %session.id, email = %session.email, "analyst signed in");
        self.emit(SessionEvent::SignedIn {
            session_id: session.id.clone(),
            email: session.email.clone(),
        });
        Ok(session)
    }
}
