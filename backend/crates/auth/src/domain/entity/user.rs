//! User Entity
//!
//! Registered account with its stored credential hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
};

/// User entity
///
/// A row from the `users` table. The password is only ever held in
/// hashed form here.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Login email (unique, case-sensitive as stored)
    pub email: Email,
    /// Argon2id hash in PHC format
    pub password_hash: UserPassword,
    /// Role carried into session tokens
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted
///
/// The id and timestamps are assigned by the store, so they do not
/// exist yet at this point.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: UserPassword,
    pub role: UserRole,
}

impl NewUser {
    /// Create a new user with the default role
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        Self {
            email,
            password_hash,
            role: UserRole::default(),
        }
    }
}
