/// Database access layer
///
/// Repository functions are free functions over `&PgPool` (or a
/// transaction connection for batch writes) with hand-written SQL.
pub mod comment_repo;
pub mod event_repo;
pub mod like_repo;
pub mod post_repo;
