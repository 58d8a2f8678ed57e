// In memory implementation of the EventRepository port.
//
// Responsibilities
// - Keep the id -> Event map behind one RwLock shared by every operation;
//   mutations hold the write guard for the whole critical section.
// - Answer the horizon queries from a snapshot taken under the read guard.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::{EventRepository, StoreError};

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<u64, Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events strictly after `now` and strictly less than `days` days ahead,
    /// sorted by date.
    async fn upcoming_within(&self, now: DateTime<Utc>, days: i64) -> Vec<Event> {
        let guard = self.events.read().await;
        let mut upcoming: Vec<Event> = guard
            .values()
            .filter(|event| event.date > now && event.date - now < Duration::days(days))
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| event.date);
        upcoming
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get_event(&self, id: u64) -> Result<Event, StoreError> {
        let guard = self.events.read().await;
        guard.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn add_event(&self, event: Event) -> Result<(), StoreError> {
        let mut guard = self.events.write().await;
        guard.insert(event.id, event);
        Ok(())
    }

    async fn update_event(&self, event: Event) -> Result<(), StoreError> {
        let mut guard = self.events.write().await;
        if !guard.contains_key(&event.id) {
            return Err(StoreError::NotFound(event.id));
        }
        guard.insert(event.id, event);
        Ok(())
    }

    async fn delete_event(&self, id: u64) -> Result<(), StoreError> {
        let mut guard = self.events.write().await;
        guard.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    async fn events_for_day(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.upcoming_within(Utc::now(), 1).await)
    }

    async fn events_for_week(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.upcoming_within(Utc::now(), 7).await)
    }

    async fn events_for_month(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.upcoming_within(Utc::now(), 30).await)
    }
}
