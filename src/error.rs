//! Error types for the Bookspace server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed mutation request, reported with the entity name and the
    /// error key the client-side scaffolding keys its alerts on
    /// (`idexists`, `idnull`, `idinvalid`).
    #[error("Bad request on {entity}: {message}")]
    BadRequestAlert {
        entity: &'static str,
        key: &'static str,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Stable error key
    pub error: String,
    /// Entity the failure relates to, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, key, entity, message) = match self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, "notauthenticated", None, msg)
            }
            AppError::Authorization(msg) => (StatusCode::FORBIDDEN, "notauthorized", None, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "notfound", None, msg),
            AppError::BadRequestAlert {
                entity,
                key,
                message,
            } => (StatusCode::BAD_REQUEST, key, Some(entity.to_string()), message),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "badvalue", None, msg),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "dbfailure",
                    None,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failure",
                    None,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: key.to_string(),
            entity,
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_alert_maps_to_400_with_entity_and_key() {
        let err = AppError::BadRequestAlert {
            entity: "borrowing",
            key: "idexists",
            message: "A new borrowing cannot already have an ID".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AppError::Authentication("no identity".into())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Authorization("admin required".into())
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("borrowing 42".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("bad date".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
