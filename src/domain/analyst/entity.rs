// src/domain/analyst/entity.rs
use crate::domain::analyst::value_objects::{AnalystId, Email, PasswordHash};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Analyst {
    pub id: AnalystId,
    pub email: Email,
    pub display_name: Option<String>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAnalyst {
    pub email: Email,
    pub display_name: Option<String>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
