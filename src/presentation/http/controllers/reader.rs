use crate::application::{
    dto::ReaderViewDto,
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReaderParams {
    pub newsletter_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/reader",
    params(ReaderParams),
    responses(
        (status = 200, description = "Newsletter with its articles grouped by country", body = ReaderViewDto),
        (status = 400, description = "Missing newsletterId", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown newsletter", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Reader"
)]
pub async fn reader_view(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ReaderParams>,
) -> HttpResult<Json<ReaderViewDto>> {
    let newsletter_id = params.newsletter_id.ok_or_else(|| {
        HttpError::from_error(ApplicationError::validation(
            "newsletterId query parameter is required",
        ))
    })?;
    let view = state
        .services
        .newsletter_queries
        .reader_view(newsletter_id)
        .await
        .into_http()?;
    Ok(Json(view))
}
