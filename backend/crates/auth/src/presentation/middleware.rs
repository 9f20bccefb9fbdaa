//! Auth Middleware
//!
//! Bearer token verification for protected routes.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::verify_token;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::AuthError;

/// Verified identity stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

/// Middleware that requires a valid bearer token
///
/// Verifies the `Authorization: Bearer <token>` header and stores the
/// authenticated identity in request extensions for downstream handlers.
pub async fn require_session(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers()).ok_or(AuthError::TokenMissing)?;

    let claims = verify_token(token, &config)?;

    let user = AuthenticatedUser {
        user_id: claims.user_id()?,
        role: claims.role,
    };

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Extractor for the identity stored by [`require_session`]
///
/// Only usable on routes behind the middleware. Elsewhere the extension
/// is absent and extraction rejects with 401.
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(CurrentUser)
            .ok_or(AuthError::TokenMissing)
    }
}
