use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
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
        match err {
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::Persistence(msg) => {
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }

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

/// JSON body returned for every failed request.
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
