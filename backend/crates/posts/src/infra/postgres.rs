//! PostgreSQL Repository Implementations

use auth::UserId;
use chrono::{DateTime, Utc};
use kernel::error::conversions::is_foreign_key_violation;
use sqlx::PgPool;

use crate::domain::entities::{NewPost, Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostContent, PostId, PostTitle};
use crate::error::{PostError, PostResult};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &NewPost) -> PostResult<PostId> {
        // author_id comes from a verified token, but the user row may
        // have been deleted since the token was issued. The FK catches
        // that case.
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.author_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                PostError::AuthorMissing
            } else {
                PostError::from(e)
            }
        })?;

        Ok(PostId::from_i64(id))
    }

    async fn find_all(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                author_id,
                created_at,
                updated_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }

    async fn find_with_author(&self, post_id: PostId) -> PostResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_id,
                p.created_at,
                p.updated_at,
                u.email AS author_email
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post_with_author()))
    }

    async fn update_owned(
        &self,
        post_id: PostId,
        author_id: UserId,
        title: &PostTitle,
        content: &PostContent,
    ) -> PostResult<Option<Post>> {
        // Ownership check and update in one statement. No row back
        // means missing or not owned, callers cannot tell which.
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $3, content = $4, updated_at = now()
            WHERE id = $1 AND author_id = $2
            RETURNING
                id,
                title,
                content,
                author_id,
                created_at,
                updated_at
            "#,
        )
        .bind(post_id.as_i64())
        .bind(author_id.as_i64())
        .bind(title.as_str())
        .bind(content.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn delete_owned(&self, post_id: PostId, author_id: UserId) -> PostResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(post_id.as_i64())
            .bind(author_id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_i64(self.id),
            title: PostTitle::from_db(self.title),
            content: PostContent::from_db(self.content),
            author_id: UserId::from_i64(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_email: Option<String>,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                post_id: PostId::from_i64(self.id),
                title: PostTitle::from_db(self.title),
                content: PostContent::from_db(self.content),
                author_id: UserId::from_i64(self.author_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_email: self.author_email,
        }
    }
}
