//! Domain Value Objects
//!
//! Immutable value types for the posts domain.

use std::fmt;

use kernel::id::Id;

use crate::error::{PostError, PostResult};

/// Marker type for post IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostMarker;

/// Typed post ID
pub type PostId = Id<PostMarker>;

/// Post title
///
/// Must contain at least one non-whitespace character. Stored as given,
/// the trim is only for the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> PostResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PostError::MissingFields);
        }
        Ok(Self(value))
    }

    /// Reconstruct from a trusted database value
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post content
///
/// Same rules as [`PostTitle`]: non-empty after trim, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> PostResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PostError::MissingFields);
        }
        Ok(Self(value))
    }

    /// Reconstruct from a trusted database value
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
