//! User Role Value Object
//!
//! Stored as text in the `role` column and carried verbatim in session
//! token claims. Only one role exists today; the type keeps the wire
//! and storage encoding in one place for when that changes.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
}

impl UserRole {
    /// Storage encoding for the `role` column
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "user",
        }
    }

    /// Decode a stored role, `None` for unknown values
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
