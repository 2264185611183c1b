/// Data models for community-service
///
/// Entities map directly onto the PostgreSQL tables created by this
/// service's migrations. Author display fields are denormalized into
/// posts and comments because user profiles live in an external system.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Post row with aggregate counts, used by list endpoints
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
}

/// Like entity - represents a user liking a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - represents a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Event entity - attendees are carried as an opaque document array
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub organizer_id: Uuid,
    pub status: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub attendees: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Payload for a single event in a bulk insert
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub organizer_id: Uuid,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attendees: Option<serde_json::Value>,
}

/// Post detail view: the post with its full like and comment arrays,
/// newest first
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}
