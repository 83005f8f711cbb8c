// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::share::ShareError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden (expired share links)
    Forbidden(String),

    // 404 Not Found (also covers not-disclosable and empty-album cases,
    // each with its own message)
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::NotFound => {
                ApiError::NotFound("Album not found or access denied".to_string())
            }
            ShareError::Expired => ApiError::Forbidden("Album link has expired".to_string()),
            ShareError::EmptyAlbum => {
                ApiError::NotFound("No images found in album".to_string())
            }
            ShareError::Validation(msg) => ApiError::BadRequest(msg),
            ShareError::Upstream(source) => {
                // Log the real error but return a generic message
                tracing::error!(error = %source, "upstream store failure");
                ApiError::InternalServerError(
                    "Failed to process download request".to_string(),
                )
            }
        }
    }
}

impl From<crate::database::manager::DatabaseError> for ApiError {
    fn from(err: crate::database::manager::DatabaseError) -> Self {
        // Log the real error but return a generic message
        tracing::error!(error = %err, "database error");
        ApiError::ServiceUnavailable("Database temporarily unavailable".to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::manager::DatabaseError;

    #[test]
    fn share_errors_map_to_contract_statuses() {
        assert_eq!(
            ApiError::from(ShareError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ShareError::Expired).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(ShareError::EmptyAlbum).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ShareError::Validation("bad".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn upstream_failures_are_a_generic_500() {
        let err = ApiError::from(ShareError::Upstream(DatabaseError::InvalidDatabaseUrl));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // internal detail stays in the logs, never in the body
        assert_eq!(err.message(), "Failed to process download request");
    }

    #[test]
    fn database_errors_surface_as_generic_unavailable() {
        let err = ApiError::from(DatabaseError::ConfigMissing("DATABASE_URL"));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message(), "Database temporarily unavailable");
    }

    #[test]
    fn empty_album_keeps_a_distinct_message() {
        let not_found = ApiError::from(ShareError::NotFound);
        let empty = ApiError::from(ShareError::EmptyAlbum);
        assert_ne!(not_found.message(), empty.message());
    }
}
