//! Posts Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_db_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Title or content missing from the request
    #[error("Title and content are required")]
    MissingFields,

    /// The authenticated author has no matching user row
    #[error("The post author does not exist")]
    AuthorMissing,

    /// Post does not exist
    #[error("Post not found")]
    NotFound,

    /// Post does not exist, or exists but belongs to someone else.
    /// One message for both, so ownership cannot be probed by id.
    #[error("Post not found or not authorized")]
    NotFoundOrNotOwned,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::MissingFields | PostError::AuthorMissing => ErrorKind::BadRequest,
            PostError::NotFound | PostError::NotFoundOrNotOwned => ErrorKind::NotFound,
            PostError::Database(e) => classify_db_error(e).0,
            PostError::Internal(_) => ErrorKind::InternalServerError,
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
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        PostError::Internal(err.to_string())
    }
}
