//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, CreatePostResponse, MessageResponse, PostDetailResponse, PostResponse,
    UpdatePostRequest,
};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<(StatusCode, Json<CreatePostResponse>)>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        author_id: user.user_id,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully".to_string(),
            post_id: output.post_id.as_i64(),
        }),
    ))
}

// ============================================================================
// Read
// ============================================================================

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(id): Path<i64>,
) -> PostResult<Json<PostDetailResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());

    let detail = use_case.execute(PostId::from_i64(id)).await?;

    Ok(Json(PostDetailResponse::from(detail)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let input = UpdatePostInput {
        post_id: PostId::from_i64(id),
        author_id: user.user_id,
        title: req.title,
        content: req.content,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Post updated successfully".to_string(),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(PostId::from_i64(id), user.user_id).await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
