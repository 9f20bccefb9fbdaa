//! Domain Entities

use auth::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::{PostContent, PostId, PostTitle};

/// A stored blog post
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post joined with its author's email
///
/// The email is `None` when the author row is gone, the join is a LEFT
/// JOIN so the post itself still comes back.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_email: Option<String>,
}

/// Data for a post that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
}
