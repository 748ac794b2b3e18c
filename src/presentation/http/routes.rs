// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{analytics, articles, auth, newsletters, reader},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/sign-in", post(auth::sign_in))
        .route("/api/v1/auth/sign-out", post(auth::sign_out))
        .route("/api/v1/auth/session", get(auth::current_session))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/selection",
            get(articles::selection_overview),
        )
        .route(
            "/api/v1/articles/{id}/toggle-selection",
            post(articles::toggle_selection),
        )
        .route(
            "/api/v1/articles/{id}/views",
            post(articles::record_article_view),
        )
        .route(
            "/api/v1/newsletters",
            get(newsletters::newsletter_gallery).post(newsletters::publish_newsletter),
        )
        .route("/api/v1/reader", get(reader::reader_view))
        .route("/api/v1/analytics/overview", get(analytics::overview))
        .route(
            "/api/v1/analytics/content-performance",
            get(analytics::content_performance),
        )
        .route(
            "/api/v1/analytics/reader-engagement",
            get(analytics::reader_engagement),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
