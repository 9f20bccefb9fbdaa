//! Posts Router
//!
//! Reads are public. Writes sit behind the auth crate's bearer
//! middleware, which puts the verified identity in request extensions.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{AuthConfig, require_session};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository, auth_config: AuthConfig) -> Router {
    let state = PostsAppState {
        repo: Arc::new(repo),
    };
    let auth_config = Arc::new(auth_config);

    let public = Router::new()
        .route("/", get(handlers::list_posts::<PgPostRepository>))
        .route("/{id}", get(handlers::get_post::<PgPostRepository>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/", post(handlers::create_post::<PgPostRepository>))
        .route(
            "/{id}",
            put(handlers::update_post::<PgPostRepository>)
                .delete(handlers::delete_post::<PgPostRepository>),
        )
        .route_layer(middleware::from_fn_with_state(auth_config, require_session))
        .with_state(state);

    public.merge(protected)
}

/// Create a generic Posts router for any repository implementation
pub fn posts_router_generic<R>(repo: R, auth_config: AuthConfig) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };
    let auth_config = Arc::new(auth_config);

    let public = Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .route("/{id}", get(handlers::get_post::<R>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route(
            "/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(middleware::from_fn_with_state(auth_config, require_session))
        .with_state(state);

    public.merge(protected)
}
