use crate::domain::analyst::{AnalystId, Email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// A signed-in analyst, keyed by its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub token: String,
    pub analyst_id: AnalystId,
    pub email: Email,
    pub display_name: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn { session_id: String, email: Email },
    SignedOut { session_id: String, email: Email },
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub expires_at: DateTime<Utc>,
}

impl SessionDto {
    /// Includes the bearer token. Only the sign-in response carries it.
    pub fn with_token(session: &Session) -> Self {
        Self {
            access_token: Some(session.token.clone()),
            ..Self::from(session)
        }
    }
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id.clone(),
            access_token: None,
            email: session.email.to_string(),
            display_name: session.display_name.clone(),
            issued_at: session.issued_at,
            expires_at: session.expires_at,
        }
    }
}
