//! Get Post Use Case

use std::sync::Arc;

use crate::domain::entities::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::{PostError, PostResult};

/// Get post use case
///
/// Public, no session required.
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: PostId) -> PostResult<PostWithAuthor> {
        self.repo
            .find_with_author(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
