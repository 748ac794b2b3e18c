// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::sign_in,
        crate::presentation::http::controllers::auth::sign_out,
        crate::presentation::http::controllers::auth::current_session,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::selection_overview,
        crate::presentation::http::controllers::articles::toggle_selection,
        crate::presentation::http::controllers::articles::record_article_view,
        crate::presentation::http::controllers::newsletters::newsletter_gallery,
        crate::presentation::http::controllers::newsletters::publish_newsletter,
        crate::presentation::http::controllers::reader::reader_view,
        crate::presentation::http::controllers::analytics::overview,
        crate::presentation::http::controllers::analytics::content_performance,
        crate::presentation::http::controllers::analytics::reader_engagement
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::domain::article::Country,
            crate::domain::article::Category,
            crate::domain::selection::SelectionTab,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::SelectionOverviewDto,
            crate::application::dto::WorkflowStateDto,
            crate::application::dto::NewsletterDto,
            crate::application::dto::NewsletterMeta,
            crate::application::dto::PublishNewsletterRequest,
            crate::application::dto::ReaderViewDto,
            crate::application::dto::CountryGroupDto,
            crate::application::dto::OverviewDto,
            crate::application::dto::ContentPerformanceDto,
            crate::application::dto::ReaderEngagementDto,
            crate::application::dto::NamedCountDto,
            crate::application::dto::DistributionDto,
            crate::application::dto::StatusFilter,
            crate::application::dto::SortKey,
            crate::application::dto::SortOrder,
            crate::application::dto::SignInRequest,
            crate::application::dto::SessionDto
        )
    ),
    tags(
        (name = "Auth", description = "Analyst sign-in and sessions"),
        (name = "Articles", description = "Article dashboard and selection"),
        (name = "Newsletters", description = "Publishing and the newsletter gallery"),
        (name = "Reader", description = "Public reader view and view counting"),
        (name = "Analytics", description = "Manager dashboards"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Bulletin API",
        description = "Article selection, newsletter publication and analytics",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` (or the default
/// path) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
