//! Prometheus metrics for community-service.
//!
//! Counters register against the default registry; `/metrics` renders
//! them in text format.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

pub static POSTS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "community_posts_created_total",
        "Total number of posts created"
    )
    .expect("posts counter registration")
});

pub static COMMENTS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "community_comments_created_total",
        "Total number of comments created"
    )
    .expect("comments counter registration")
});

pub static LIKES_RECORDED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "community_likes_recorded_total",
        "Total number of likes recorded"
    )
    .expect("likes counter registration")
});

pub static EVENTS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "community_events_created_total",
        "Total number of events created"
    )
    .expect("events counter registration")
});

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn serve_metrics_renders_registered_counters() {
        POSTS_CREATED.inc();

        let resp = serve_metrics().await;
        assert!(resp.status().is_success());
    }
}
