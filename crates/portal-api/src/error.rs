//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] portal_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] portal_auth::AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Database(e) => match e {
                portal_db::DbError::Duplicate(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                portal_db::DbError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                _ => {
                    // Store failures never expose detail to the caller
                    error!("Database error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            ApiError::Auth(e) => {
                let status = match e {
                    portal_auth::AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
                    // Hashing and signing failures are server-side faults
                    portal_auth::AuthError::PasswordHash(_) | portal_auth::AuthError::Jwt(_) => {
                        error!("Auth error: {}", e);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::UNAUTHORIZED,
                };
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    "Internal server error".to_string()
                } else {
                    e.to_string()
                };
                (status, message)
            }
        };

        let body = axum::Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_auth::AuthError;

    async fn response_parts(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_signing_failure_maps_to_generic_500() {
        let err = ApiError::Auth(AuthError::Jwt(
            jsonwebtoken::errors::ErrorKind::InvalidSignature.into(),
        ));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("JWT"));
    }

    #[tokio::test]
    async fn test_hashing_failure_maps_to_generic_500() {
        let err = ApiError::Auth(AuthError::PasswordHash("salt too short".to_string()));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("salt"));
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_400() {
        let err = ApiError::Database(portal_db::DbError::Duplicate("exists".to_string()));
        let (status, _) = response_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
