use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::events::core::ports::EventRepository;
use crate::shell::state::AppState;

pub async fn handle_day(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.events_for_day().await {
        Ok(events) => Json(events).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "events_for_day: query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_week(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.events_for_week().await {
        Ok(events) => Json(events).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "events_for_week: query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_month(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.events_for_month().await {
        Ok(events) => Json(events).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "events_for_month: query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
