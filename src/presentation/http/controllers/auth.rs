// src/presentation/http/controllers/auth.rs
use crate::application::dto::{SessionDto, SignInRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Session issued; accessToken is the bearer token", body = SessionDto),
        (status = 401, description = "Invalid credentials", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn sign_in(
    Extension(state): Extension<HttpState>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> HttpResult<Json<SessionDto>> {
    let session = state
        .services
        .auth
        .sign_in(&request.email, &request.password)
        .await
        .into_http()?;
    Ok(Json(SessionDto::with_token(&session)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    responses((status = 204, description = "Session ended")),
    tag = "Auth"
)]
pub async fn sign_out(
    Extension(state): Extension<HttpState>,
    Authenticated(session): Authenticated,
) -> HttpResult<StatusCode> {
    state
        .services
        .auth
        .sign_out(&session.token)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    responses(
        (status = 200, description = "Current session", body = SessionDto),
        (status = 401, description = "Missing or expired session", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn current_session(Authenticated(session): Authenticated) -> Json<SessionDto> {
    Json(SessionDto::from(&session))
}
