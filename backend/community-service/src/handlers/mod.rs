/// HTTP handlers for community endpoints
///
/// - Posts: create/list/get/delete posts, like/unlike, comment
/// - Events: bulk insert, cancellation, per-organizer lookup
use actix_web::web;

pub mod events;
pub mod posts;

pub use events::{cancel_event, create_events, get_organizer_events};
pub use posts::{
    add_comment, create_post, delete_comment, delete_post, get_post, like_post, list_posts,
    unlike_post,
};

/// Route table under `/api`, shared by the binary and the test harness
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/posts")
                    .route("", web::post().to(create_post))
                    .route("", web::get().to(list_posts))
                    .route("/like/{id}", web::put().to(like_post))
                    .route("/unlike/{id}", web::put().to(unlike_post))
                    .route("/comment/{id}", web::post().to(add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(delete_comment),
                    )
                    .route("/{id}", web::get().to(get_post))
                    .route("/{id}", web::delete().to(delete_post)),
            )
            .service(
                web::scope("/events")
                    .route("", web::post().to(create_events))
                    .route("/organizer/{id}", web::get().to(get_organizer_events))
                    .route("/{id}", web::patch().to(cancel_event)),
            ),
    );
}
