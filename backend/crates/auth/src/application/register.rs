//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Both fields present, checked before any shape validation
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // Validate email shape
        let email =
            Email::new(input.email).map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        // Reject duplicates up front; the unique index still backstops races
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::InvalidPassword(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Persist
        let new_user = NewUser::new(email, password_hash);
        let user_id = self.repo.create(&new_user).await?;

        tracing::info!(user_id = %user_id, "User registered");

        Ok(RegisterOutput { user_id })
    }
}
