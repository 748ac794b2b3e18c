// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Session, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A request carrying a live analyst session in `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Session);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let session = app_state
            .services
            .auth
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(session))
    }
}

/// `axum::Json` whose rejection is rendered as an `ErrorResponse`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` whose rejection is rendered as an `ErrorResponse`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` whose rejection is rendered as an `ErrorResponse`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
