//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! plus SQLSTATE classification helpers shared by the persistence layers.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// SQLx エラーを [`ErrorKind`] と汎用メッセージに分類
///
/// `From<sqlx::Error>` と各ドメインのエラー型の両方から使用されます。
#[cfg(feature = "sqlx")]
pub fn classify_db_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL specific error codes
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // Class 23 — Integrity Constraint Violation
                    "23502" => (ErrorKind::BadRequest, "Required field is null"),
                    "23503" => (ErrorKind::BadRequest, "Referenced record does not exist"),
                    "23505" => (ErrorKind::Conflict, "Duplicate key value"),
                    "23514" => (ErrorKind::BadRequest, "Check constraint violation"),
                    // Class 53 — Insufficient Resources
                    "53000" | "53100" | "53200" | "53300" => {
                        (ErrorKind::ServiceUnavailable, "Database resource exhausted")
                    }
                    // Class 57 — Operator Intervention
                    "57000" | "57014" | "57P01" | "57P02" | "57P03" => {
                        (ErrorKind::ServiceUnavailable, "Database unavailable")
                    }
                    _ => (ErrorKind::InternalServerError, "Database error"),
                }
            } else {
                (ErrorKind::InternalServerError, "Database error")
            }
        }
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        sqlx::Error::Protocol(_) => (ErrorKind::InternalServerError, "Database protocol error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

/// 一意制約違反（SQLSTATE 23505）かどうかを判定
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

/// 外部キー制約違反（SQLSTATE 23503）かどうかを判定
#[cfg(feature = "sqlx")]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503"))
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_db_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 5xx messages are replaced by client_message, details stay in logs
        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "sqlx")]
    mod sqlx_conversions {
        use super::*;

        #[test]
        fn test_row_not_found_maps_to_not_found() {
            let app_err: AppError = sqlx::Error::RowNotFound.into();
            assert_eq!(app_err.kind(), ErrorKind::NotFound);
        }

        #[test]
        fn test_pool_timeout_maps_to_service_unavailable() {
            let app_err: AppError = sqlx::Error::PoolTimedOut.into();
            assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
            assert_eq!(app_err.client_message(), "Service temporarily unavailable");
        }

        #[test]
        fn test_classify_io_error() {
            let err = sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ));
            let (kind, _) = classify_db_error(&err);
            assert_eq!(kind, ErrorKind::ServiceUnavailable);
        }

        #[test]
        fn test_violation_helpers_reject_other_errors() {
            assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
            assert!(!is_foreign_key_violation(&sqlx::Error::PoolTimedOut));
        }
    }
}
