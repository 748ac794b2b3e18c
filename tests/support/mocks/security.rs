// tests/support/mocks/security.rs
use async_trait::async_trait;
use bulletin_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::security::{PasswordHasher, SessionTokenGenerator},
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reversible "hash" so tests skip Argon2's cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

#[derive(Default)]
pub struct SequentialTokens {
    next: AtomicUsize,
}

impl SessionTokenGenerator for SequentialTokens {
    fn generate(&self) -> ApplicationResult<String> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(format!("token-{n}"))
    }
}
