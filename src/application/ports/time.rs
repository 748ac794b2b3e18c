// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for default publish dates and session expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
