/// Configuration management for Community Service
///
/// This module handles loading configuration from environment variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// List pagination configuration
    pub pagination: PaginationConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// List pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the request does not specify a limit
    pub default_limit: i64,
    /// Upper bound on the requested page size
    pub max_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("COMMUNITY_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("COMMUNITY_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                workers: std::env::var("COMMUNITY_SERVICE_WORKERS")
                    .ok()
                    .and_then(|w| w.parse().ok())
                    .unwrap_or(4),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/community".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            pagination: PaginationConfig {
                default_limit: std::env::var("PAGINATION_DEFAULT_LIMIT")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(50),
                max_limit: std::env::var("PAGINATION_MAX_LIMIT")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(100),
            },
        })
    }
}

impl PaginationConfig {
    /// Resolve the requested limit/offset into values safe to hand to
    /// the database. Missing values fall back to the configured
    /// defaults; out-of-range values are clamped.
    pub fn resolve(&self, limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
        let limit = limit.unwrap_or(self.default_limit).clamp(1, self.max_limit);
        let offset = offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

impl CorsConfig {
    /// Split the configured origin list into trimmed, non-empty entries
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
