// Ports define what the events module needs from the outside world, without
// implementing it.
//
// Responsibilities
// - Describe the event store as a trait so handlers stay independent of the
//   concrete storage.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the adapters
//   layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no such event: id={0}")]
    NotFound(u64),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Exact lookup by id.
    async fn get_event(&self, id: u64) -> Result<Event, StoreError>;

    /// Unconditional upsert at `event.id`; overwrites silently.
    async fn add_event(&self, event: Event) -> Result<(), StoreError>;

    /// Replaces the value at `event.id`; fails if the id is absent.
    async fn update_event(&self, event: Event) -> Result<(), StoreError>;

    /// Removes the key; fails if the id is absent.
    async fn delete_event(&self, id: u64) -> Result<(), StoreError>;

    /// Events strictly in the future and less than one day ahead.
    async fn events_for_day(&self) -> Result<Vec<Event>, StoreError>;

    /// Events strictly in the future and less than seven days ahead.
    async fn events_for_week(&self) -> Result<Vec<Event>, StoreError>;

    /// Events strictly in the future and less than thirty days ahead.
    async fn events_for_month(&self) -> Result<Vec<Event>, StoreError>;
}
