use super::AuthService;
use crate::{
    application::error::ApplicationResult,
    domain::analyst::{Email, NewAnalyst, PasswordHash},
};

impl AuthService {
    /// Creates the analyst account if no account uses `email` yet.
    /// Returns `true` when a new account was written.
    pub async fn ensure_analyst(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> ApplicationResult<bool> {
        let email = Email::new(email)?;
        let existing = self
            .deadline
            .read("find analyst", self.analysts.find_by_email(&email))
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        let password_hash = PasswordHash::new(self.hasher.hash(password).await?)?;
        let analyst = NewAnalyst {
            email,
            display_name,
            password_hash,
            created_at: self.clock.now(),
        };
        let created = self
            .deadline
            .write("insert analyst", self.analysts.insert(analyst))
            .await?;
        tracing::info!(email = %created.email, "bootstrap analyst created");
        Ok(true)
    }
}
