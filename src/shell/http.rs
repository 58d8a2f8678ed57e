use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_upcoming::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create_event", post(create_http::handle))
        .route("/update_event", post(update_http::handle))
        .route("/delete_event", post(delete_http::handle))
        .route("/events_for_day", get(list_http::handle_day))
        .route("/events_for_week", get(list_http::handle_week))
        .route("/events_for_month", get(list_http::handle_month))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
