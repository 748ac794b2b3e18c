// src/presentation/http/controllers/articles.rs
use crate::application::dto::{
    ArticleDto, ArticleListDto, ArticleListQuery, SelectionOverviewDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(
        ("country" = Option<String>, Query, description = "Country label or \"all\""),
        ("category" = Option<String>, Query, description = "Category label or \"all\""),
        ("search" = Option<String>, Query, description = "Case-insensitive text over title, company and summary"),
        ("tab" = Option<crate::domain::selection::SelectionTab>, Query, description = "all | selected | featured")
    ),
    responses(
        (status = 200, description = "Filtered articles", body = ArticleListDto),
        (status = 400, description = "Unknown country or category", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or expired session", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
    ApiQuery(params): ApiQuery<ArticleListQuery>,
) -> HttpResult<Json<ArticleListDto>> {
    let filter = params.into_filter().into_http()?;
    let list = state
        .services
        .article_queries
        .list_articles(&filter)
        .await
        .into_http()?;
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/selection",
    responses(
        (status = 200, description = "Pending selection and published articles", body = SelectionOverviewDto)
    ),
    tag = "Articles"
)]
pub async fn selection_overview(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
) -> HttpResult<Json<SelectionOverviewDto>> {
    let overview = state
        .services
        .article_queries
        .selection_overview()
        .await
        .into_http()?;
    Ok(Json(overview))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/toggle-selection",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Stored article after the toggle", body = ArticleDto),
        (status = 404, description = "Unknown article", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article already published", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn toggle_selection(
    Extension(state): Extension<HttpState>,
    session: Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_commands
        .toggle_selection(id)
        .await
        .into_http()?;
    tracing::info!(
        article_id = id,
        selected = article.selected_for_newsletter,
        analyst = %session.0.email,
        "selection toggled"
    );
    Ok(Json(article))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/views",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "View recorded"),
        (status = 404, description = "Unknown article", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Reader"
)]
pub async fn record_article_view(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .record_article_view(id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
