//! Create Post Use Case

use std::sync::Arc;

use auth::UserId;

use crate::domain::entities::NewPost;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostContent, PostId, PostTitle};
use crate::error::PostResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    /// Taken from the verified session, never from the request body
    pub author_id: UserId,
}

/// Create post output
#[derive(Debug)]
pub struct CreatePostOutput {
    pub post_id: PostId,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<CreatePostOutput> {
        let title = PostTitle::new(input.title)?;
        let content = PostContent::new(input.content)?;

        let post_id = self
            .repo
            .create(&NewPost {
                title,
                content,
                author_id: input.author_id,
            })
            .await?;

        tracing::info!(post_id = %post_id, author_id = %input.author_id, "Post created");

        Ok(CreatePostOutput { post_id })
    }
}
