/// Post handlers - HTTP endpoints for post, like, and comment operations
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::{CommentRemoval, LikeOutcome, PostService, UnlikeOutcome};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Author identity carried in the request payload.
/// Authentication is handled upstream; profiles live in an external system.
#[derive(Debug, Deserialize)]
pub struct AuthorRef {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "validate_text_present"))]
    pub text: String,
    pub user: AuthorRef,
}

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "validate_text_present"))]
    pub text: String,
    pub user: AuthorRef,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn validate_text_present(text: &str) -> std::result::Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Text is required".into());
        return Err(err);
    }
    Ok(())
}

/// Validation failure body: `{ "errors": [{ "msg": ..., "param": ... }] }`
#[derive(Debug, Serialize)]
struct FieldError {
    msg: String,
    param: String,
}

fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    let errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                msg: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
                param: field.to_string(),
            })
        })
        .collect();

    HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
}

/// Parse a post id from the path. Malformed ids behave like unknown
/// posts so the path never leaks a 400 for a bad id.
fn parse_post_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// Create a new post
/// POST /api/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        return Ok(validation_response(&errors));
    }

    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(
            req.user.id,
            &req.user.name,
            req.user.avatar.as_deref(),
            &req.text,
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List posts with like/comment counts, newest first
/// GET /api/posts
pub async fn list_posts(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let (limit, offset) = config.pagination.resolve(query.limit, query.offset);

    let service = PostService::new((**pool).clone());
    let posts = service.list_posts(limit, offset).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post with its like and comment arrays
/// GET /api/posts/{id}
pub async fn get_post(pool: web::Data<PgPool>, path: web::Path<String>) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    match service.get_post(post_id).await? {
        Some(detail) => Ok(HttpResponse::Ok().json(detail)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Delete a post
/// DELETE /api/posts/{id}
pub async fn delete_post(pool: web::Data<PgPool>, path: web::Path<String>) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    if service.delete_post(post_id).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Post removed" })))
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}

/// Like a post
/// PUT /api/posts/like/{id}
pub async fn like_post(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    match service.like_post(post_id, req.user_id).await? {
        None => Err(AppError::NotFound("Post not found".to_string())),
        Some(LikeOutcome::AlreadyLiked) => {
            Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Post already liked" })))
        }
        Some(LikeOutcome::Liked(likes)) => Ok(HttpResponse::Ok().json(likes)),
    }
}

/// Remove a like from a post
/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let service = PostService::new((**pool).clone());
    match service.unlike_post(post_id, req.user_id).await? {
        None => Err(AppError::NotFound("Post not found".to_string())),
        Some(UnlikeOutcome::NotYetLiked) => {
            Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Post has not yet been liked" })))
        }
        Some(UnlikeOutcome::Unliked(likes)) => Ok(HttpResponse::Ok().json(likes)),
    }
}

/// Comment on a post; responds with the refreshed comment array
/// POST /api/posts/comment/{id}
pub async fn add_comment(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    if let Err(errors) = req.validate() {
        return Ok(validation_response(&errors));
    }

    let service = PostService::new((**pool).clone());
    match service
        .add_comment(
            post_id,
            req.user.id,
            &req.user.name,
            req.user.avatar.as_deref(),
            &req.text,
        )
        .await?
    {
        Some(comments) => Ok(HttpResponse::Ok().json(comments)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Remove a comment; responds with the refreshed comment array
/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_post_id(&raw_post_id)?;

    // Unknown comment ids reply 200 with a message, not an error.
    let Ok(comment_id) = raw_comment_id.parse::<Uuid>() else {
        return Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Comment does not exist" })));
    };

    let service = PostService::new((**pool).clone());
    match service.remove_comment(post_id, comment_id).await? {
        None => Err(AppError::NotFound("Post not found".to_string())),
        Some(CommentRemoval::Missing) => {
            Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Comment does not exist" })))
        }
        Some(CommentRemoval::Removed(comments)) => Ok(HttpResponse::Ok().json(comments)),
    }
}
