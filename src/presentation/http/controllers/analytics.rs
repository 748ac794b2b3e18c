// src/presentation/http/controllers/analytics.rs
use crate::application::dto::{
    ContentPerformanceDto, ContentPerformanceQuery, OverviewDto, ReaderEngagementDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/analytics/overview",
    responses((status = 200, description = "Counts by category, country and workflow state", body = OverviewDto)),
    tag = "Analytics"
)]
pub async fn overview(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
) -> HttpResult<Json<OverviewDto>> {
    let overview = state.services.analytics.overview().await.into_http()?;
    Ok(Json(overview))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/content-performance",
    params(
        ("status" = Option<crate::application::dto::StatusFilter>, Query, description = "all | published | selected | not_selected"),
        ("sort" = Option<crate::application::dto::SortKey>, Query, description = "created | published | views | title"),
        ("order" = Option<crate::application::dto::SortOrder>, Query, description = "asc | desc")
    ),
    responses((status = 200, description = "Views rollups and sorted content tables", body = ContentPerformanceDto)),
    tag = "Analytics"
)]
pub async fn content_performance(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
    ApiQuery(query): ApiQuery<ContentPerformanceQuery>,
) -> HttpResult<Json<ContentPerformanceDto>> {
    let report = state
        .services
        .analytics
        .content_performance(query)
        .await
        .into_http()?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/reader-engagement",
    responses((status = 200, description = "Newsletter readership and article views", body = ReaderEngagementDto)),
    tag = "Analytics"
)]
pub async fn reader_engagement(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
) -> HttpResult<Json<ReaderEngagementDto>> {
    let report = state.services.analytics.reader_engagement().await.into_http()?;
    Ok(Json(report))
}
