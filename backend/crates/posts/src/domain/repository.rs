//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::UserId;

use crate::domain::entities::{NewPost, Post, PostWithAuthor};
use crate::domain::value_objects::{PostContent, PostId, PostTitle};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post, returning the store-assigned id
    async fn create(&self, post: &NewPost) -> PostResult<PostId>;

    /// All posts, newest first (created_at, then id as tiebreaker)
    async fn find_all(&self) -> PostResult<Vec<Post>>;

    /// One post joined with its author's email
    async fn find_with_author(&self, post_id: PostId) -> PostResult<Option<PostWithAuthor>>;

    /// Update a post only if `author_id` owns it.
    /// `None` covers both a missing post and one owned by someone else.
    async fn update_owned(
        &self,
        post_id: PostId,
        author_id: UserId,
        title: &PostTitle,
        content: &PostContent,
    ) -> PostResult<Option<Post>>;

    /// Delete a post only if `author_id` owns it.
    /// `false` covers both a missing post and one owned by someone else.
    async fn delete_owned(&self, post_id: PostId, author_id: UserId) -> PostResult<bool>;
}
