/// Event handlers - HTTP endpoints for event operations
use crate::error::{AppError, Result};
use crate::models::NewEvent;
use crate::services::EventService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Bulk insert a batch of events in one transaction
/// POST /api/events
pub async fn create_events(
    pool: web::Data<PgPool>,
    req: web::Json<Vec<NewEvent>>,
) -> Result<HttpResponse> {
    let service = EventService::new((**pool).clone());
    let inserted = service.create_events(&req).await?;

    tracing::info!(count = inserted, "event batch saved");

    Ok(HttpResponse::Ok().body("Successfully saved"))
}

/// Mark an event as cancelled
/// PATCH /api/events/{id}
pub async fn cancel_event(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = EventService::new((**pool).clone());
    if service.cancel_event(*path).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "msg": "Cancelled" })))
    } else {
        Err(AppError::NotFound("Event not found".to_string()))
    }
}

/// Get all events for an organizer
/// GET /api/events/organizer/{id}
pub async fn get_organizer_events(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = EventService::new((**pool).clone());
    let events = service.organizer_events(*path).await?;

    Ok(HttpResponse::Ok().json(events))
}
