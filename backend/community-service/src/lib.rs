/// Community Service Library
///
/// Handles posts, likes, comments, and events endpoints for the community
/// platform.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route configuration
/// - `models`: Data structures for posts, likes, comments, events
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
