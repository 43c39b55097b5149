//! API error types

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use presence_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Status code, error kind and client-facing message.
    ///
    /// Server-side failures and values rejected by the database get a fixed
    /// message; their detail only goes to the log.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request", self.to_string()),
            ApiError::Core(core) => match core {
                CoreError::PlayerNotFound(_) => {
                    (StatusCode::NOT_FOUND, "not_found", core.to_string())
                }
                CoreError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    "bad_request",
                    "Rejected value".to_string(),
                ),
                CoreError::StorageUnavailable(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage_unavailable",
                    "Storage is temporarily unavailable".to_string(),
                ),
                CoreError::Database(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Internal server error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = self.parts();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else if let ApiError::Core(CoreError::Validation(detail)) = &self {
            warn!(detail = %detail, "Value rejected by storage");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_player_not_found_maps_to_404() {
        let response = ApiError::from(CoreError::PlayerNotFound(9)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "Player not found: 9");
    }

    #[tokio::test]
    async fn test_validation_detail_not_leaked() {
        let core = CoreError::Validation(
            "value too long for type character varying(16)".to_string(),
        );
        let response = ApiError::from(core).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.error, "bad_request");
        assert_eq!(body.message, "Rejected value");
    }

    #[tokio::test]
    async fn test_storage_unavailable_maps_to_503() {
        let response = ApiError::from(CoreError::from(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_of(response).await;
        assert_eq!(body.error, "storage_unavailable");
    }

    #[tokio::test]
    async fn test_database_error_detail_not_leaked() {
        let core = CoreError::from(sqlx::Error::ColumnNotFound("presence_status".to_string()));
        let response = ApiError::from(core).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "database_error");
        assert!(!body.message.contains("presence_status"));
    }
}
