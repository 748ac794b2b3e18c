// src/infrastructure/security/token.rs
use crate::application::{error::ApplicationResult, ports::security::SessionTokenGenerator};
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

const TOKEN_BYTES: usize = 32;

/// Opaque bearer tokens: 32 bytes from the OS RNG, URL-safe base64 without padding.
#[derive(Default, Clone)]
pub struct RandomTokenGenerator;

impl SessionTokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> ApplicationResult<String> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let generator = RandomTokenGenerator;
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
