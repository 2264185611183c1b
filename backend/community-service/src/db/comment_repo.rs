use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    author_name: &str,
    author_avatar: Option<&str>,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, author_name, author_avatar, content)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, post_id, user_id, author_name, author_avatar, content, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(author_name)
    .bind(author_avatar)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get all comments for a post, newest first
pub async fn get_post_comments(pool: &PgPool, post_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, author_name, author_avatar, content, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Find a comment by ID scoped to its post
pub async fn find_comment(
    pool: &PgPool,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, author_name, author_avatar, content, created_at
        FROM comments
        WHERE id = $1 AND post_id = $2
        "#,
    )
    .bind(comment_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Delete a comment. Returns true if a row was removed.
pub async fn delete_comment(
    pool: &PgPool,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM comments
        WHERE id = $1 AND post_id = $2
        "#,
    )
    .bind(comment_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
