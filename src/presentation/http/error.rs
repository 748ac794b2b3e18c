// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, status = status.as_u16(), "request failed");
        }
        let message = match err {
            ApplicationError::EmptySelection => ApplicationError::EmptySelection.to_string(),
            ApplicationError::Fetch(msg)
            | ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::InvalidState(msg)
            | ApplicationError::Publication(msg)
            | ApplicationError::Timeout(msg)
            | ApplicationError::Unauthorized(msg)
            | ApplicationError::Infrastructure(msg) => msg,
        };
        Self::new(status, message)
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) | ApplicationError::EmptySelection => {
            StatusCode::BAD_REQUEST
        }
        ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::InvalidState(_) => StatusCode::CONFLICT,
        ApplicationError::Fetch(_) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ApplicationError::Publication(_) | ApplicationError::Infrastructure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

// Extractor rejections keep axum's status code but use the common error body.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
