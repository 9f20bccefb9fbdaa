//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_db_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing from the request
    #[error("Email and password are required")]
    MissingCredentials,

    /// Email failed shape validation
    #[error("{0}")]
    InvalidEmail(String),

    /// Password failed policy validation
    #[error("{0}")]
    InvalidPassword(String),

    /// Email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Wrong email or password, one message for both
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No usable Authorization: Bearer header on the request
    #[error("Missing or malformed token")]
    TokenMissing,

    /// Token expiry has passed
    #[error("Token expired")]
    TokenExpired,

    /// Bad signature, malformed payload or unparsable subject
    #[error("Invalid token")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidPassword(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenExpired
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(e) => classify_db_error(e).0,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Failed login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
