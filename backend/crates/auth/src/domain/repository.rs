//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the store-assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find user by email, byte-exact comparison
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if a user with this email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
