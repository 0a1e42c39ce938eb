use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::dto::common::ApiResponse;

pub type Result<T> = std::result::Result<T, Error>;

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Referential-integrity conflict: the row is still in use, or points at a
    /// row that does not exist.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Too many requests")]
    TooManyRequests,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl Error {
    fn status_and_title(&self) -> (StatusCode, &'static str) {
        match self {
            Error::BadRequest(_)
            | Error::Validation(_)
            | Error::Json(_)
            | Error::Multipart(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            Error::Conflict(_) => (StatusCode::BAD_REQUEST, "Conflict with related data"),
            Error::Unauthorized(_) | Error::Jwt(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            Error::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, "Too many requests"),
            // Server-side faults are reported as 400 with the raw message too.
            _ => (StatusCode::BAD_REQUEST, "Request failed"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, title) = self.status_and_title();
        let detail = match &self {
            Error::BadRequest(msg)
            | Error::Unauthorized(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg) => msg.clone(),
            Error::Validation(err) => err.to_string(),
            Error::Json(err) => err.to_string(),
            Error::Multipart(err) => err.to_string(),
            Error::Jwt(_) => "invalid_token".to_string(),
            Error::TooManyRequests => "rate_limit_exceeded".to_string(),
            other => {
                tracing::error!(error = %other, "request failed");
                other.to_string()
            }
        };

        let body = Json(ApiResponse::<()>::failure(title, detail));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db) => {
                let code = db.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some(FOREIGN_KEY_VIOLATION) => Error::Conflict(db.message().to_string()),
                    Some(UNIQUE_VIOLATION) => {
                        Error::BadRequest(format!("Duplicate value: {}", db.message()))
                    }
                    Some(CHECK_VIOLATION) => Error::BadRequest(db.message().to_string()),
                    _ => Error::Database(sqlx::Error::Database(db)),
                }
            }
            other => Error::Database(other),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn conflict_renders_as_bad_request_envelope() {
        let resp = Error::Conflict("still referenced".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["Message"], "Conflict with related data");
        assert_eq!(body["Error"], "still referenced");
        assert!(body.get("Data").is_none());
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(
            Error::Unauthorized("x".into()).status_and_title().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::NotFound("x".into()).status_and_title().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Internal("disk full".into()).status_and_title(),
            (StatusCode::BAD_REQUEST, "Request failed")
        );
        assert_eq!(
            Error::PasswordHash("x".into()).status_and_title().0,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn internal_errors_carry_raw_message() {
        let resp = Error::Internal("Failed to save file: disk full".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["Message"], "Request failed");
        assert_eq!(body["Error"], "Internal error: Failed to save file: disk full");
    }
}
