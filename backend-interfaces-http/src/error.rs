use std::any::Any;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred. Please try again later.";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    /// Request body or query could not be decoded into the expected shape.
    Rejected(StatusCode, String),
    Internal,
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::InvalidIdentifier(msg) => HttpError::BadRequest(msg),
            backend_application::AppError::NotFound(msg) => HttpError::NotFound(msg),
            // already logged where it was classified
            backend_application::AppError::Internal(_) => HttpError::Internal,
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(value: JsonRejection) -> Self {
        HttpError::Rejected(value.status(), value.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(value: QueryRejection) -> Self {
        HttpError::Rejected(value.status(), value.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Rejected(status, msg) => (status, msg),
            HttpError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Last-resort handler for panics escaping a request; the panic payload is logged, never returned.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("request handler panicked: {}", detail);
    HttpError::Internal.into_response()
}
