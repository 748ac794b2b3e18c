// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use bulletin_core::application::{
    services::{ApplicationServices, Repositories, SecurityPorts},
    timeout::StoreDeadline,
};
use bulletin_core::infrastructure::security::session_store::InMemorySessionStore;
use bulletin_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{FixedClock, InMemoryStore, PlainPasswordHasher, SequentialTokens};

pub const ANALYST_EMAIL: &str = "analyst@example.com";
pub const ANALYST_PASSWORD: &str = "curate-all-the-things";

pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

pub fn harness(store: InMemoryStore) -> TestHarness {
    harness_with_deadline(store, StoreDeadline::default())
}

pub fn harness_with_deadline(store: InMemoryStore, deadline: StoreDeadline) -> TestHarness {
    let store = Arc::new(store);
    let clock = Arc::new(FixedClock::default());
    let repos = Repositories {
        article_read: store.clone(),
        article_write: store.clone(),
        newsletter_read: store.clone(),
        newsletter_write: store.clone(),
        analysts: store.clone(),
    };
    let security = SecurityPorts {
        password_hasher: Arc::new(PlainPasswordHasher),
        token_generator: Arc::new(SequentialTokens::default()),
        session_store: Arc::new(InMemorySessionStore::new()),
        session_ttl: chrono::Duration::hours(8),
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        security,
        clock.clone(),
        deadline,
    ));
    TestHarness {
        store,
        clock,
        services,
    }
}

impl TestHarness {
    pub fn router(&self) -> axum::Router {
        build_router(HttpState::new(Arc::clone(&self.services), Vec::new()))
    }

    /// Creates the default analyst and returns a fresh bearer token.
    pub async fn signed_in_token(&self) -> String {
        self.services
            .auth
            .ensure_analyst(ANALYST_EMAIL, ANALYST_PASSWORD, Some("Analyst".into()))
            .await
            .unwrap();
        self.services
            .auth
            .sign_in(ANALYST_EMAIL, ANALYST_PASSWORD)
            .await
            .unwrap()
            .token
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts status plus the `{error, message}` body shape.
pub async fn assert_error(resp: Response, status: StatusCode, reason: &str) -> Value {
    assert_eq!(resp.status(), status);
    let json = read_json(resp).await;
    assert_eq!(json["error"], reason);
    assert!(json["message"].is_string());
    json
}
