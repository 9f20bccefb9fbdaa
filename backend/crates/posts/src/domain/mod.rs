//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{NewPost, Post, PostWithAuthor};
pub use repository::PostRepository;
pub use value_objects::{PostContent, PostId, PostTitle};
