//! Fixtures shared by the handler tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use chrono::DateTime;
use entity::{sea_orm_active_enums::SwipeAction, swipe, user};
use sea_orm::{DbBackend, MockDatabase, Transaction};
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router, State};

pub(crate) fn mock_state(db: MockDatabase) -> Arc<State> {
    Arc::new(State {
        db: db.into_connection(),
    })
}

/// A store with nothing queued; every statement against it fails.
pub(crate) fn failing_state() -> Arc<State> {
    mock_state(MockDatabase::new(DbBackend::Postgres))
}

/// Drive one request through the full router and decode the JSON envelope.
pub(crate) async fn send(
    state: Arc<State>,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Statements the mock store saw. The router must already be dropped.
pub(crate) fn into_transaction_log(state: Arc<State>) -> Vec<Transaction> {
    match Arc::try_unwrap(state) {
        Ok(state) => state.db.into_transaction_log(),
        Err(_) => panic!("state is still shared"),
    }
}

pub(crate) fn user_row(id: i32, name: &str, email: &str, created_at: &str) -> user::Model {
    user::Model {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        created_at: DateTime::parse_from_rfc3339(created_at).unwrap(),
    }
}

pub(crate) fn swipe_row(
    id: i32,
    swiper_user_id: i32,
    target_profile_id: i32,
    action: SwipeAction,
    created_at: &str,
) -> swipe::Model {
    swipe::Model {
        id,
        swiper_user_id,
        target_profile_id,
        action,
        created_at: DateTime::parse_from_rfc3339(created_at).unwrap(),
    }
}
