// End to end tests for the events API: full router, in-memory repository.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::events::adapters::in_memory::InMemoryEventRepository;
use crate::modules::events::core::ports::EventRepository;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn make_app() -> (Router, AppState) {
    let state = AppState {
        events: Arc::new(InMemoryEventRepository::new()),
    };
    (router(state.clone()), state)
}

async fn post_json(app: &Router, path: &str, body: String) -> Response<axum::body::Body> {
    app.clone()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_json(app: &Router, path: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn ack_of(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn event_body(id: &str, name: &str, date: chrono::DateTime<Utc>) -> String {
    format!(
        r#"{{"user_id":"1","id":"{id}","name":"{name}","date":"{}"}}"#,
        date.to_rfc3339()
    )
}

#[tokio::test]
async fn it_should_run_the_full_event_lifecycle() {
    let (app, state) = make_app();
    let soon = Utc::now() + Duration::hours(1);

    let response = post_json(&app, "/create_event", event_body("10", "standup", soon)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        ack_of(response).await,
        serde_json::json!({"result": "event with id=10 created"})
    );

    let listed = get_json(&app, "/events_for_day").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "standup");

    let response = post_json(&app, "/update_event", event_body("10", "retro", soon)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.events.get_event(10).await.unwrap().name, "retro");

    let response = post_json(&app, "/delete_event", r#"{"id":"10"}"#.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(get_json(&app, "/events_for_day").await, serde_json::json!([]));

    let response = post_json(&app, "/delete_event", r#"{"id":"10"}"#.to_string()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_dispatch_a_create_to_the_create_handler_only() {
    let (app, state) = make_app();
    let soon = Utc::now() + Duration::hours(1);

    let response = post_json(&app, "/create_event", event_body("7", "standup", soon)).await;

    assert_eq!(
        ack_of(response).await,
        serde_json::json!({"result": "event with id=7 created"})
    );
    assert!(state.events.get_event(7).await.is_ok());
}

#[tokio::test]
async fn it_should_keep_serving_after_a_malformed_body() {
    let (app, _state) = make_app();
    let soon = Utc::now() + Duration::hours(1);

    let response = post_json(&app, "/create_event", "{not valid json".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(&app, "/create_event", event_body("1", "standup", soon)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn it_should_reject_an_update_before_any_create() {
    let (app, state) = make_app();
    let soon = Utc::now() + Duration::hours(1);

    let response = post_json(&app, "/update_event", event_body("4", "standup", soon)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(state.events.get_event(4).await.is_err());
}
