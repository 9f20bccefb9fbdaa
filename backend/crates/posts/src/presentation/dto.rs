//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, PostWithAuthor};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
///
/// Fields default to empty so an absent field reads as missing input
/// and gets the 400 from the use case, not a deserialization reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Create post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub message: String,
    pub post_id: i64,
}

/// A post as returned by the list endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.as_i64(),
            title: post.title.into_string(),
            content: post.content.into_string(),
            author_id: post.author_id.as_i64(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A single post with its author's email
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// `null` when the author account no longer exists
    pub author_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithAuthor> for PostDetailResponse {
    fn from(detail: PostWithAuthor) -> Self {
        let post = detail.post;
        Self {
            id: post.post_id.as_i64(),
            title: post.title.into_string(),
            content: post.content.into_string(),
            author_id: post.author_id.as_i64(),
            author_email: detail.author_email,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
