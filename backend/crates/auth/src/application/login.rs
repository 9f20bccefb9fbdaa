//! Login Use Case
//!
//! Authenticates a user and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::RawPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token
    pub token: String,
    pub user_id: UserId,
    pub email: Email,
    pub role: UserRole,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // Anything that cannot be a stored email is just a failed login.
        // Unknown email and wrong password share one error so the
        // response never says which half was wrong.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = session_token::issue_token(user.user_id, user.role, &self.config)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
            email: user.email,
            role: user.role,
        })
    }
}
