use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::Envelope;
use crate::domain::errors::ValidationError;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code, category and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Resource Not Found", message)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Unprocessable Entity",
            message,
        )
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::failure(self.status, self.kind, self.message));

        (self.status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(operation = err.operation(), error = %err, "repository call failed");
        Self::internal_server_error(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, status = %rejection.status(), "rejected request body");
        Self::unprocessable_entity("invalid body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::EmptyField("name"));

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, "Bad Request");
        assert_eq!(err.message, "name cannot be empty");
    }

    #[test]
    fn repository_error_exposes_message() {
        let err = ApiError::from(RepositoryError::new("TeamRepository::list", "timed out"));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind, "Internal Server Error");
        assert_eq!(err.message, "TeamRepository::list: timed out");
    }

    #[test]
    fn not_found_category() {
        let err = ApiError::not_found("cannot find the requested team");

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.kind, "Resource Not Found");
    }

    #[test]
    fn error_response_uses_status() {
        let response = ApiError::unprocessable_entity("invalid body").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
