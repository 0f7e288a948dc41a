use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use entity::user;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use crate::handlers::ValidatedJson;
use crate::response::Envelope;
use crate::server::State;

/// The JSON input for `POST /api/users`
///
/// Missing fields decode as empty strings so they fail validation with the
/// same message as blank ones.
#[derive(Debug, Validate, Deserialize)]
pub(crate) struct NewUserInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name and email are required"))]
    pub(crate) name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name and email are required"))]
    pub(crate) email: String,
}

/// Handler for `GET /api/users`
pub(crate) async fn list_users(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Envelope<Vec<user::Model>>>, ApiError> {
    let users = user::Entity::find()
        .order_by_desc(user::Column::CreatedAt)
        .order_by_desc(user::Column::Id)
        .all(&state.db)
        .await
        .map_err(ApiError::ListUsers)?;

    Ok(Json(Envelope::with_data(
        "Users retrieved successfully",
        users,
    )))
}

/// Handler for `POST /api/users`
pub(crate) async fn create_user(
    Extension(state): Extension<Arc<State>>,
    ValidatedJson(input): ValidatedJson<NewUserInput>,
) -> Result<(StatusCode, Json<Envelope<user::Model>>), ApiError> {
    let created = user::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(ApiError::CreateUser)?;

    tracing::info!(user_id = created.id, "created user");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("User created successfully", created)),
    ))
}
