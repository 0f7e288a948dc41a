use std::borrow::Cow;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::UnknownSwipeAction;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::constants::{
    INSERT_FAILED_MESSAGE, INVALID_ACTION_MESSAGE, INVALID_BODY_MESSAGE, QUERY_FAILED_MESSAGE,
    USER_CONFLICT_MESSAGE,
};
use crate::response::Envelope;

/// Any possible request errors
///
/// Store failures carry the operation they came from, since that decides the
/// status code the caller sees.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),

    #[error(transparent)]
    UnknownAction(#[from] UnknownSwipeAction),

    #[error("listing users failed: {0}")]
    ListUsers(#[source] DbErr),

    #[error("inserting user failed: {0}")]
    CreateUser(#[source] DbErr),

    #[error("inserting swipe failed: {0}")]
    CreateSwipe(#[source] DbErr),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, Cow<'static, str>) {
        match self {
            ApiError::JsonRejection(_) => (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.into()),
            ApiError::ValidationError(errors) => {
                (StatusCode::BAD_REQUEST, first_validation_message(errors))
            }
            ApiError::UnknownAction(_) => (StatusCode::BAD_REQUEST, INVALID_ACTION_MESSAGE.into()),
            ApiError::ListUsers(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                QUERY_FAILED_MESSAGE.into(),
            ),
            // a unique violation on email is the expected cause, but any store
            // error ends up here
            ApiError::CreateUser(_) => (StatusCode::CONFLICT, USER_CONFLICT_MESSAGE.into()),
            ApiError::CreateSwipe(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INSERT_FAILED_MESSAGE.into(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::ListUsers(_) | ApiError::CreateUser(_) | ApiError::CreateSwipe(_) => {
                tracing::error!(error = %self, "store operation failed");
            }
            _ => tracing::debug!(error = %self, "rejected request"),
        }

        let (status, message) = self.status_and_message();
        (status, Json(Envelope::bare(message))).into_response()
    }
}

/// The message of the first failing field, fields taken in name order so the
/// answer is stable.
fn first_validation_message(errors: &ValidationErrors) -> Cow<'static, str> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.clone())
        .unwrap_or(Cow::Borrowed(INVALID_BODY_MESSAGE))
}
