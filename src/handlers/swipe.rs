use std::{borrow::Cow, sync::Arc};

use axum::{extract::Extension, http::StatusCode, Json};
use entity::{sea_orm_active_enums::SwipeAction, swipe};
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::constants::INVALID_ACTION_MESSAGE;
use crate::error::ApiError;
use crate::handlers::ValidatedJson;
use crate::response::Envelope;
use crate::server::State;

/// The JSON input for `POST /api/swipes`
///
/// Both ids are required. Neither is checked against `users`.
#[derive(Debug, Validate, Deserialize)]
pub(crate) struct NewSwipeInput {
    pub(crate) swiper_user_id: i32,
    pub(crate) target_profile_id: i32,
    #[serde(default)]
    #[validate(custom = "validate_action")]
    pub(crate) action: String,
}

fn validate_action(action: &str) -> Result<(), ValidationError> {
    action.parse::<SwipeAction>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("action");
        error.message = Some(Cow::Borrowed(INVALID_ACTION_MESSAGE));
        error
    })
}

/// Handler for `POST /api/swipes`
pub(crate) async fn create_swipe(
    Extension(state): Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<NewSwipeInput>,
) -> Result<(StatusCode, Json<Envelope<swipe::Model>>), ApiError> {
    let action: SwipeAction = input.action.parse()?;

    let saved = swipe::ActiveModel {
        swiper_user_id: Set(input.swiper_user_id),
        target_profile_id: Set(input.target_profile_id),
        action: Set(action),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(ApiError::CreateSwipe)?;

    tracing::info!(
        swipe_id = saved.id,
        swiper_user_id = saved.swiper_user_id,
        target_profile_id = saved.target_profile_id,
        action = %saved.action,
        "saved swipe"
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Swipe saved", saved)),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use entity::sea_orm_active_enums::SwipeAction;
    use sea_orm::{DbBackend, MockDatabase};
    use serde_json::json;

    use crate::test_utils::{failing_state, into_transaction_log, mock_state, send, swipe_row};

    #[tokio::test]
    async fn like_is_saved_and_returned_in_full() {
        let state = mock_state(MockDatabase::new(DbBackend::Postgres).append_query_results(
            vec![vec![swipe_row(
                11,
                1,
                2,
                SwipeAction::Like,
                "2024-05-03T12:30:00+00:00",
            )]],
        ));

        let body = json!({ "swiper_user_id": 1, "target_profile_id": 2, "action": "like" })
            .to_string();
        let (status, body) = send(state.clone(), Method::POST, "/api/swipes", Some(&body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Swipe saved");
        assert_eq!(body["data"]["id"], 11);
        assert_eq!(body["data"]["swiper_user_id"], 1);
        assert_eq!(body["data"]["target_profile_id"], 2);
        assert_eq!(body["data"]["action"], "like");
        assert!(body["data"]["created_at"].is_string());

        assert_eq!(into_transaction_log(state).len(), 1);
    }

    #[tokio::test]
    async fn anything_but_like_or_pass_is_rejected_before_the_store() {
        for action in [json!("superlike"), json!("LIKE"), json!(""), json!(null)] {
            let state = failing_state();
            let mut payload = json!({ "swiper_user_id": 1, "target_profile_id": 2 });
            if !action.is_null() {
                payload["action"] = action.clone();
            }
            let body = payload.to_string();

            let (status, body) =
                send(state.clone(), Method::POST, "/api/swipes", Some(&body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "action {action}");
            assert_eq!(body, json!({ "message": "action must be 'like' or 'pass'" }));
            assert!(into_transaction_log(state).is_empty());
        }
    }

    #[tokio::test]
    async fn malformed_or_mistyped_body_is_a_client_error() {
        for body in [
            "not json",
            r#"{"swiper_user_id": "1", "target_profile_id": 2, "action": "pass"}"#,
            r#"{"target_profile_id": 2, "action": "pass"}"#,
        ] {
            let state = failing_state();
            let (status, response) =
                send(state.clone(), Method::POST, "/api/swipes", Some(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(response, json!({ "message": "Invalid request body" }));
            assert!(into_transaction_log(state).is_empty());
        }
    }

    #[tokio::test]
    async fn store_failure_is_a_server_error() {
        let body = json!({ "swiper_user_id": 1, "target_profile_id": 2, "action": "pass" })
            .to_string();
        let (status, body) = send(failing_state(), Method::POST, "/api/swipes", Some(&body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "DB insert failed" }));
    }
}
