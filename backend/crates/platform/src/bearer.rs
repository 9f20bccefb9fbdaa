//! Bearer Token Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` header scheme.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, is not valid UTF-8, or does
/// not use the `Bearer ` scheme. The scheme check is case-sensitive and
/// the token is returned exactly as sent, so an empty or garbage token
/// still comes back `Some` and fails verification downstream.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with_authorization("bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_bare_scheme_without_token() {
        let headers = headers_with_authorization("Bearer");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token_is_passed_through() {
        // Verification, not extraction, rejects this one
        let headers = headers_with_authorization("Bearer ");
        assert_eq!(extract_bearer_token(&headers), Some(""));
    }
}
