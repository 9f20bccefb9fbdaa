//! Update Post Use Case

use std::sync::Arc;

use auth::UserId;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostContent, PostId, PostTitle};
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: PostId,
    /// Taken from the verified session, never from the request body
    pub author_id: UserId,
    pub title: String,
    pub content: String,
}

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<Post> {
        let title = PostTitle::new(input.title)?;
        let content = PostContent::new(input.content)?;

        // Single conditional update. A missing post and one owned by
        // someone else come back as the same not-found.
        let updated = self
            .repo
            .update_owned(input.post_id, input.author_id, &title, &content)
            .await?
            .ok_or(PostError::NotFoundOrNotOwned)?;

        tracing::info!(post_id = %updated.post_id, "Post updated");

        Ok(updated)
    }
}
