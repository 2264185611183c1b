use crate::models::Like;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new like on a post.
/// The unique (post_id, user_id) constraint rejects duplicates.
pub async fn create_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<Like, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (post_id, user_id)
        VALUES ($1, $2)
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(like)
}

/// Delete a like from a post. Returns true if a row was removed.
pub async fn delete_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Check if a user has liked a post
pub async fn find_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM likes
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

/// Get all likes for a post, newest first
pub async fn get_post_likes(pool: &PgPool, post_id: Uuid) -> Result<Vec<Like>, sqlx::Error> {
    let likes = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM likes
        WHERE post_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(likes)
}
