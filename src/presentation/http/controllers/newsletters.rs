use crate::application::dto::{NewsletterDto, PublishNewsletterRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/newsletters",
    responses(
        (status = 200, description = "Published newsletters, newest first", body = [NewsletterDto])
    ),
    tag = "Newsletters"
)]
pub async fn newsletter_gallery(
    Extension(state): Extension<HttpState>,
    _session: Authenticated,
) -> HttpResult<Json<Vec<NewsletterDto>>> {
    let newsletters = state
        .services
        .newsletter_queries
        .newsletter_gallery()
        .await
        .into_http()?;
    Ok(Json(newsletters))
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletters",
    request_body = PublishNewsletterRequest,
    responses(
        (status = 201, description = "Newsletter published", body = NewsletterDto),
        (status = 400, description = "Empty selection or blank title/description", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article not selected or already published", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Publication failed; nothing was written", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn publish_newsletter(
    Extension(state): Extension<HttpState>,
    session: Authenticated,
    ApiJson(request): ApiJson<PublishNewsletterRequest>,
) -> HttpResult<(StatusCode, Json<NewsletterDto>)> {
    let newsletter = state
        .services
        .newsletter_commands
        .publish(request.meta, request.article_ids)
        .await
        .into_http()?;
    tracing::info!(newsletter_id = newsletter.id, analyst = %session.0.email, "publish request completed");
    Ok((StatusCode::CREATED, Json(newsletter)))
}
