//! Handler error type with IntoResponse
//!
//! Errors render as HTML pages with the matching status code.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::views;

/// Handler error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum WebError {
    /// Malformed request, e.g. a non-numeric id (400)
    BadRequest { message: String },

    /// Unreadable form body; keeps the extractor's 4xx status
    InvalidForm { status: StatusCode, message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Storage failure (500, logged)
    Database(DbError),
}

impl WebError {
    pub fn book_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "book",
            id: id.to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, views::client_error("Bad Request", &message))
                    .into_response()
            }
            Self::InvalidForm { status, message } => {
                let reason = status.canonical_reason().unwrap_or("Bad Request");
                (status, views::client_error(reason, &message)).into_response()
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "not found");
                let message = format!("{} '{}' not found", resource, id);
                (StatusCode::NOT_FOUND, views::not_found(&message)).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return a generic page
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, views::server_error()).into_response()
            }
        }
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::InvalidForm {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<DbError> for WebError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
