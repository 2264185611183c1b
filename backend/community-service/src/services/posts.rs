/// Post service - post lifecycle plus like and comment operations
use crate::db::{comment_repo, like_repo, post_repo};
use crate::error::Result;
use crate::metrics;
use crate::models::{Comment, Like, Post, PostDetail, PostSummary};
use sqlx::PgPool;
use uuid::Uuid;

/// Result of a like request
pub enum LikeOutcome {
    /// The user already holds a like on this post; nothing was inserted
    AlreadyLiked,
    /// Like recorded; the refreshed like array, newest first
    Liked(Vec<Like>),
}

/// Result of an unlike request
pub enum UnlikeOutcome {
    /// The user never liked this post; nothing was removed
    NotYetLiked,
    /// Like removed; the refreshed like array, newest first
    Unliked(Vec<Like>),
}

/// Result of a comment removal request
pub enum CommentRemoval {
    /// No such comment on this post
    Missing,
    /// Comment removed; the refreshed comment array, newest first
    Removed(Vec<Comment>),
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create_post(
        &self,
        user_id: Uuid,
        author_name: &str,
        author_avatar: Option<&str>,
        content: &str,
    ) -> Result<Post> {
        let post =
            post_repo::create_post(&self.pool, user_id, author_name, author_avatar, content)
                .await?;

        metrics::POSTS_CREATED.inc();

        Ok(post)
    }

    /// List posts with like/comment counts, newest first
    pub async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<PostSummary>> {
        Ok(post_repo::list_posts(&self.pool, limit, offset).await?)
    }

    /// Get a post with its full like and comment arrays
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<PostDetail>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(None);
        };

        let likes = like_repo::get_post_likes(&self.pool, post_id).await?;
        let comments = comment_repo::get_post_comments(&self.pool, post_id).await?;

        Ok(Some(PostDetail {
            post,
            likes,
            comments,
        }))
    }

    /// Delete a post (likes and comments cascade).
    /// Returns false if the post does not exist.
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        Ok(post_repo::delete_post(&self.pool, post_id).await?)
    }

    /// Like a post. Returns None if the post does not exist.
    ///
    /// The pre-check keeps the common path cheap; the unique constraint
    /// on (post_id, user_id) decides the race when two requests arrive
    /// at once.
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Option<LikeOutcome>> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Ok(None);
        }

        if like_repo::find_like(&self.pool, post_id, user_id).await?.is_some() {
            return Ok(Some(LikeOutcome::AlreadyLiked));
        }

        match like_repo::create_like(&self.pool, post_id, user_id).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Ok(Some(LikeOutcome::AlreadyLiked));
            }
            Err(err) => return Err(err.into()),
        }

        metrics::LIKES_RECORDED.inc();

        let likes = like_repo::get_post_likes(&self.pool, post_id).await?;
        Ok(Some(LikeOutcome::Liked(likes)))
    }

    /// Remove a like from a post. Returns None if the post does not exist.
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Option<UnlikeOutcome>> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Ok(None);
        }

        if !like_repo::delete_like(&self.pool, post_id, user_id).await? {
            return Ok(Some(UnlikeOutcome::NotYetLiked));
        }

        let likes = like_repo::get_post_likes(&self.pool, post_id).await?;
        Ok(Some(UnlikeOutcome::Unliked(likes)))
    }

    /// Comment on a post; returns the refreshed comment array, newest
    /// first. Returns None if the post does not exist.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        author_name: &str,
        author_avatar: Option<&str>,
        content: &str,
    ) -> Result<Option<Vec<Comment>>> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Ok(None);
        }

        comment_repo::create_comment(
            &self.pool,
            post_id,
            user_id,
            author_name,
            author_avatar,
            content,
        )
        .await?;

        metrics::COMMENTS_CREATED.inc();

        let comments = comment_repo::get_post_comments(&self.pool, post_id).await?;
        Ok(Some(comments))
    }

    /// Remove a comment from a post. Returns None if the post does not
    /// exist.
    pub async fn remove_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentRemoval>> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Ok(None);
        }

        if comment_repo::find_comment(&self.pool, post_id, comment_id).await?.is_none() {
            return Ok(Some(CommentRemoval::Missing));
        }

        comment_repo::delete_comment(&self.pool, post_id, comment_id).await?;

        let comments = comment_repo::get_post_comments(&self.pool, post_id).await?;
        Ok(Some(CommentRemoval::Removed(comments)))
    }
}
