use crate::models::{Event, NewEvent};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Insert a single event within a caller-managed transaction
pub async fn insert_event(conn: &mut PgConnection, event: &NewEvent) -> Result<Event, sqlx::Error> {
    let attendees = event
        .attendees
        .clone()
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));

    let inserted = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (name, description, location, organizer_id, status, starts_at, attendees)
        VALUES ($1, $2, $3, $4, COALESCE($5, 'Scheduled'), $6, $7)
        RETURNING id, name, description, location, organizer_id, status, starts_at, attendees, created_at
        "#,
    )
    .bind(&event.name)
    .bind(&event.description)
    .bind(&event.location)
    .bind(event.organizer_id)
    .bind(&event.status)
    .bind(event.starts_at)
    .bind(attendees)
    .fetch_one(conn)
    .await?;

    Ok(inserted)
}

/// Mark an event as cancelled. Returns true if a row was updated.
pub async fn cancel_event(pool: &PgPool, event_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE events
        SET status = 'Cancelled'
        WHERE id = $1
        "#,
    )
    .bind(event_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Find all events for an organizer, soonest start first
pub async fn find_events_by_organizer(
    pool: &PgPool,
    organizer_id: Uuid,
) -> Result<Vec<Event>, sqlx::Error> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, description, location, organizer_id, status, starts_at, attendees, created_at
        FROM events
        WHERE organizer_id = $1
        ORDER BY starts_at ASC NULLS LAST, created_at ASC
        "#,
    )
    .bind(organizer_id)
    .fetch_all(pool)
    .await?;

    Ok(events)
}
