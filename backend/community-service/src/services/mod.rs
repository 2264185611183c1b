/// Business logic layer for community-service
///
/// - Post service: post lifecycle, likes, comments
/// - Event service: bulk insert, cancellation, organizer lookup
pub mod events;
pub mod posts;

pub use events::EventService;
pub use posts::{CommentRemoval, LikeOutcome, PostService, UnlikeOutcome};
