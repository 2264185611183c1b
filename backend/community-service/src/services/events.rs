/// Event service - bulk insert, cancellation, organizer lookup
use crate::db::event_repo;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{Event, NewEvent};
use sqlx::PgPool;
use uuid::Uuid;

pub struct EventService {
    pool: PgPool,
}

impl EventService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a batch of events in a single transaction.
    /// One failing row rolls back the whole batch.
    pub async fn create_events(&self, events: &[NewEvent]) -> Result<usize> {
        if events.is_empty() {
            return Err(AppError::BadRequest("event batch is empty".to_string()));
        }

        for event in events {
            if event.name.trim().is_empty() {
                return Err(AppError::Validation("event name is required".to_string()));
            }
        }

        let mut tx = self.pool.begin().await?;

        for event in events {
            event_repo::insert_event(&mut *tx, event).await?;
        }

        tx.commit().await?;

        metrics::EVENTS_CREATED.inc_by(events.len() as u64);

        Ok(events.len())
    }

    /// Mark an event as cancelled. Returns false if the event does not
    /// exist.
    pub async fn cancel_event(&self, event_id: Uuid) -> Result<bool> {
        Ok(event_repo::cancel_event(&self.pool, event_id).await?)
    }

    /// Get all events organized by a user
    pub async fn organizer_events(&self, organizer_id: Uuid) -> Result<Vec<Event>> {
        Ok(event_repo::find_events_by_organizer(&self.pool, organizer_id).await?)
    }
}
