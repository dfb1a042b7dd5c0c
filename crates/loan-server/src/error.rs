//! Server error type and its HTTP mapping.
//!
//! Client mistakes become 400/404 plain text. Everything else is logged and
//! answered with a bare 500.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loan_core::errors::CoreError;
use loan_core::uploads::UploadRejection;
use loan_db::error::DatabaseError;
use loan_notify::NotifyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid client input; the message is shown verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// A looked-up resource does not exist; the message is shown verbatim.
    #[error("{0}")]
    NotFound(String),

    /// Malformed multipart body.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UploadRejection> for ServerError {
    fn from(rejection: UploadRejection) -> Self {
        Self::BadRequest(rejection.message().to_string())
    }
}

impl From<CoreError> for ServerError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::BadRequest(message),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Multipart(error) => (error.status(), error.body_text()).into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_bad_requests() {
        let response = ServerError::from(UploadRejection::DisallowedExtension).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let error = ServerError::from(CoreError::Validation("Invalid loan amount: abc".into()));
        assert_eq!(error.to_string(), "Invalid loan amount: abc");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_opaque() {
        let response = ServerError::from(DatabaseError::NoResult).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_keeps_message() {
        let error = ServerError::NotFound("Application not found".into());
        assert_eq!(error.to_string(), "Application not found");
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }
}
