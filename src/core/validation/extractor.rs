//! Axum extractor for `{ "data": ... }` request bodies
//!
//! The body is captured untyped and never rejected at extraction time, so a
//! handler can answer existence and state checks before the body is judged.
//! Conversion into a payload DTO happens in [`Payload::parse`].

use crate::core::envelope::DataEnvelope;
use crate::core::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::convert::Infallible;

/// Raw request payload (the contents of `data`)
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn update_dish(
///     State(state): State<DishAppState>,
///     Path(dish_id): Path<String>,
///     body: Payload,
/// ) -> Result<impl IntoResponse, ApiError> {
///     // look the dish up first, then
///     let payload: DishPayload = body.parse()?;
/// }
/// ```
#[derive(Debug)]
pub struct Payload {
    data: Result<Value, String>,
}

impl Payload {
    /// Convert the captured `data` into a payload DTO
    ///
    /// A body that was not readable JSON fails with `Invalid request body: ...`.
    /// A missing or non-object `data` yields the DTO's default, so the chain
    /// answers with its first presence message.
    pub fn parse<T: DeserializeOwned + Default>(self) -> Result<T, ApiError> {
        match self.data {
            Err(reason) => Err(ApiError::Validation(format!(
                "Invalid request body: {reason}"
            ))),
            Ok(data @ Value::Object(_)) => serde_json::from_value(data)
                .map_err(|e| ApiError::Validation(format!("Invalid request body: {e}"))),
            Ok(_) => Ok(T::default()),
        }
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let data = match Json::<DataEnvelope<Value>>::from_request(req, state).await {
            Ok(Json(envelope)) => Ok(envelope.data),
            Err(rejection) => Err(rejection.body_text()),
        };
        Ok(Payload { data })
    }
}
