use crate::models::{Post, PostSummary};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    author_name: &str,
    author_avatar: Option<&str>,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, author_name, author_avatar, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, author_name, author_avatar, content, created_at
        "#,
    )
    .bind(user_id)
    .bind(author_name)
    .bind(author_avatar)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, author_name, author_avatar, content, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List posts with like/comment counts, newest first
pub async fn list_posts(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostSummary>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostSummary>(
        r#"
        SELECT p.id, p.user_id, p.author_name, p.author_avatar, p.content, p.created_at,
               (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
               (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
        FROM posts p
        ORDER BY p.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Delete a post; likes and comments cascade.
/// Returns true if a row was removed.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
