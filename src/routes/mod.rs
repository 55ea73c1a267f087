use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

use crate::services::ServiceError;

pub mod client;

/// Structured JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// Maps a service-layer failure to its HTTP response.
///
/// This is the single place where the error taxonomy meets status codes:
/// not-found becomes 404, database/validation failures become 400, anything
/// unexpected is logged and reported as 500 without leaking internals.
pub fn error_response(err: &ServiceError, path: &str) -> HttpResponse {
    let (status, error, message) = match err {
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found",
            err.to_string(),
        ),
        ServiceError::Database(_) => (StatusCode::BAD_REQUEST, "Database exception", err.to_string()),
        ServiceError::Validation(_) => {
            (StatusCode::BAD_REQUEST, "Validation error", err.to_string())
        }
        ServiceError::Internal(msg) => {
            log::error!("Internal error while handling {path}: {msg}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "Internal server error".to_string(),
            )
        }
    };

    HttpResponse::build(status).json(ErrorBody {
        timestamp: Utc::now().to_rfc3339(),
        status: status.as_u16(),
        error: error.to_string(),
        message,
        path: path.to_string(),
    })
}
