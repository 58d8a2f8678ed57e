// Inbound field parsing for the POST endpoints.
//
// All numeric fields arrive as decimal strings and the date as RFC3339, so
// each endpoint decodes a typed body of strings and converts it here once.
// An empty `id` means "assign none explicitly" and maps to id 0.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid id: {0}")]
    InvalidId(std::num::ParseIntError),

    #[error("invalid user_id: {0}")]
    InvalidUserId(std::num::ParseIntError),

    #[error("invalid date: {0}")]
    InvalidDate(chrono::ParseError),
}

pub fn parse_event_id(raw: &str) -> Result<u64, FieldError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>().map_err(FieldError::InvalidId)
}

pub fn parse_user_id(raw: &str) -> Result<u64, FieldError> {
    raw.parse::<u64>().map_err(FieldError::InvalidUserId)
}

pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, FieldError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(FieldError::InvalidDate)
}
