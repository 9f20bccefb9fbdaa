//! Delete Post Use Case

use std::sync::Arc;

use auth::UserId;

use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId, author_id: UserId) -> PostResult<()> {
        // Single conditional delete, same not-found for missing and
        // not-owned posts.
        let deleted = self.repo.delete_owned(post_id, author_id).await?;

        if !deleted {
            return Err(PostError::NotFoundOrNotOwned);
        }

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
