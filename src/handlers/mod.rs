use axum::{
    async_trait,
    body::HttpBody,
    extract::{FromRequest, RequestParts},
    BoxError, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

pub(crate) mod health;
pub(crate) mod swipe;
pub(crate) mod user;

pub(crate) use health::*;
pub(crate) use swipe::*;
pub(crate) use user::*;

/// A validated JSON body.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ValidatedJson<T>(pub(crate) T);

#[async_trait]
impl<T, B> FromRequest<B> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    B: HttpBody + Send,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = ApiError;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
