use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::Event;
use crate::modules::events::core::fields::{
    FieldError, parse_event_date, parse_event_id, parse_user_id,
};
use crate::modules::events::core::ports::{EventRepository, StoreError};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub user_id: String,
    pub id: String,
    pub name: String,
    pub date: String,
}

#[derive(Serialize)]
pub struct UpdateEventResponse {
    pub result: String,
}

fn parse_event(body: UpdateEventBody) -> Result<Event, FieldError> {
    Ok(Event {
        id: parse_event_id(&body.id)?,
        user_id: parse_user_id(&body.user_id)?,
        name: body.name,
        date: parse_event_date(&body.date)?,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "update_event: rejected request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let event = match parse_event(body) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(error = %err, "update_event: invalid field");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let id = event.id;
    match state.events.update_event(event).await {
        Ok(()) => Json(UpdateEventResponse {
            result: format!("event with id={id} updated"),
        })
        .into_response(),
        Err(err @ StoreError::NotFound(_)) => {
            tracing::warn!(error = %err, "update_event: store miss");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
