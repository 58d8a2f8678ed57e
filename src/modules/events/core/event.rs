use chrono::{DateTime, Utc};

/// A scheduled calendar event. `id` is the unique store key; `user_id` is an
/// owner reference with no referential integrity behind it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub date: DateTime<Utc>,
}
