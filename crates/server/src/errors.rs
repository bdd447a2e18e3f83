use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"message": ..., "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "record not found", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, detail = ?self.detail, "request failed");
        }
        let body = ErrorBody { message: &self.message, detail: self.detail.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

/// The one place where service outcomes become HTTP status codes.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::MissingFields(names) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "missing required fields", Some(names.join(", ")))
            }
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "validation error", Some(msg))
            }
            ServiceError::NotFound(_) => JsonApiError::not_found(),
            ServiceError::Db(msg) | ServiceError::Model(ModelError::Db(msg)) => {
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "persistence error", Some(msg))
            }
        }
    }
}

/// Malformed JSON, wrong content type, or wrongly typed fields.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "invalid request body", Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
