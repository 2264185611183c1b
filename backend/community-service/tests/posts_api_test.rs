//! Integration tests: posts, likes, comments
//!
//! Exercises the HTTP surface end to end against a real PostgreSQL
//! database. Skips when no container runtime is available.

mod common;

use actix_web::{test, web, App};
use community_service::{handlers, Config};
use serde_json::{json, Value};
use uuid::Uuid;

fn author_body(text: &str) -> Value {
    json!({
        "text": text,
        "user": {
            "id": Uuid::new_v4(),
            "name": "Ada Lovelace",
            "avatar": "https://example.test/avatar.png"
        }
    })
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new(Config::from_env().expect("test config")))
                .configure(handlers::routes),
        )
        .await
    };
}

macro_rules! create_post {
    ($app:expr, $text:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(author_body($text))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 201, "post creation should return 201");
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn create_and_list_posts() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let first = create_post!(&app, "first post");
    assert_eq!(first["content"], "first post");
    assert_eq!(first["author_name"], "Ada Lovelace");

    create_post!(&app, "second post");

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let posts: Value = test::read_body_json(resp).await;
    let posts = posts.as_array().expect("list response is an array");
    assert_eq!(posts.len(), 2);
    // Newest first.
    assert_eq!(posts[0]["content"], "second post");
    assert_eq!(posts[1]["content"], "first post");
    for post in posts {
        assert_eq!(post["like_count"], 0);
        assert_eq!(post["comment_count"], 0);
    }
}

#[actix_web::test]
async fn list_posts_clamps_out_of_range_pagination() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    create_post!(&app, "only post");

    // Negative values fall back to the smallest sane page.
    let req = test::TestRequest::get()
        .uri("/api/posts?limit=-1&offset=-5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let posts: Value = test::read_body_json(resp).await;
    assert_eq!(posts.as_array().expect("posts array").len(), 1);

    // Oversized limits are capped rather than rejected.
    let req = test::TestRequest::get()
        .uri("/api/posts?limit=100000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let posts: Value = test::read_body_json(resp).await;
    assert_eq!(posts.as_array().expect("posts array").len(), 1);
}

#[actix_web::test]
async fn create_post_requires_text() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(author_body("   "))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors[0]["msg"], "Text is required");
}

#[actix_web::test]
async fn missing_and_malformed_post_ids_return_not_found() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post not found");

    let req = test::TestRequest::get()
        .uri("/api/posts/not-a-valid-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post not found");
}

#[actix_web::test]
async fn delete_post_removes_it() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let post = create_post!(&app, "short-lived");
    let post_id = post["id"].as_str().expect("post id").to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post removed");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn delete_post_cascades_likes_and_comments() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let post = create_post!(&app, "cascades away");
    let post_id = post["id"].as_str().expect("post id").to_string();
    let post_uuid: Uuid = post_id.parse().expect("post uuid");

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/like/{post_id}"))
        .set_json(json!({ "user_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/comment/{post_id}"))
        .set_json(author_body("a comment"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1")
        .bind(post_uuid)
        .fetch_one(&pool)
        .await
        .expect("likes count");
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
        .bind(post_uuid)
        .fetch_one(&pool)
        .await
        .expect("comments count");
    assert_eq!(likes, 0);
    assert_eq!(comments, 0);
}

#[actix_web::test]
async fn like_and_unlike_post() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let post = create_post!(&app, "like me");
    let post_id = post["id"].as_str().expect("post id").to_string();
    let user_id = Uuid::new_v4();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/like/{post_id}"))
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let likes: Value = test::read_body_json(resp).await;
    assert_eq!(likes.as_array().expect("likes array").len(), 1);

    // A second like from the same user is rejected without duplicating.
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/like/{post_id}"))
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post already liked");

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/unlike/{post_id}"))
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let likes: Value = test::read_body_json(resp).await;
    assert_eq!(likes.as_array().expect("likes array").len(), 0);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/unlike/{post_id}"))
        .set_json(json!({ "user_id": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post has not yet been liked");
}

#[actix_web::test]
async fn like_missing_post_returns_not_found() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/like/{}", Uuid::new_v4()))
        .set_json(json!({ "user_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn comment_lifecycle() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let post = create_post!(&app, "discuss");
    let post_id = post["id"].as_str().expect("post id").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/comment/{post_id}"))
        .set_json(author_body("first comment"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let comments: Value = test::read_body_json(resp).await;
    let comments = comments.as_array().expect("comments array");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "first comment");

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/comment/{post_id}"))
        .set_json(author_body("second comment"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let comments: Value = test::read_body_json(resp).await;
    let comments = comments.as_array().expect("comments array").clone();
    assert_eq!(comments.len(), 2);
    // Newest first.
    assert_eq!(comments[0]["content"], "second comment");
    assert_eq!(comments[1]["content"], "first comment");

    let target = comments
        .iter()
        .find(|c| c["content"] == "first comment")
        .expect("first comment present");
    let comment_id = target["id"].as_str().expect("comment id");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{post_id}/{comment_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let remaining: Value = test::read_body_json(resp).await;
    let remaining = remaining.as_array().expect("comments array");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["content"], "second comment");

    // Unknown comment ids answer with a message, not an error.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{post_id}/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Comment does not exist");
}

#[actix_web::test]
async fn get_post_includes_likes_and_comments() {
    let Some(pool) = common::setup_test_db().await else {
        return;
    };
    let app = test_app!(pool);

    let post = create_post!(&app, "full detail");
    let post_id = post["id"].as_str().expect("post id").to_string();

    let first_fan = Uuid::new_v4();
    let second_fan = Uuid::new_v4();
    for user_id in [first_fan, second_fan] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/like/{post_id}"))
            .set_json(json!({ "user_id": user_id }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/comment/{post_id}"))
        .set_json(author_body("a comment"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["content"], "full detail");
    let likes = detail["likes"].as_array().expect("likes");
    assert_eq!(likes.len(), 2);
    // Newest like first.
    assert_eq!(likes[0]["user_id"], second_fan.to_string());
    assert_eq!(likes[1]["user_id"], first_fan.to_string());
    assert_eq!(detail["comments"].as_array().expect("comments").len(), 1);
}
