use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::fields::parse_event_id;
use crate::modules::events::core::ports::{EventRepository, StoreError};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    pub id: String,
}

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub result: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "delete_event: rejected request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let id = match parse_event_id(&body.id) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(error = %err, "delete_event: invalid field");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.events.delete_event(id).await {
        Ok(()) => Json(DeleteEventResponse {
            result: format!("event with id={id} deleted"),
        })
        .into_response(),
        Err(err @ StoreError::NotFound(_)) => {
            tracing::warn!(error = %err, "delete_event: store miss");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
