//! Request extractors that report failures through [`AppError`].
//!
//! Axum's stock extractors answer rejections with plain-text bodies; these
//! wrappers keep every error response in the `{"error": "..."}` shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use plantsy_core::plant::PLANT_ENTITY;
use plantsy_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, BAD_REQUEST_MESSAGE};

/// JSON object request body.
///
/// The body must be a JSON object: serde would otherwise bind an array to
/// struct fields by position. Malformed JSON, a wrong content type, a
/// non-object body, or fields that do not fit `T` all become
/// `400 {"error": "Bad request"}`.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(object) = Json::<Map<String, Value>>::from_request(req, state).await?;
        let value = serde_json::from_value(Value::Object(object)).map_err(|err| {
            tracing::debug!(error = %err, "Request body does not fit payload");
            AppError::BadRequest(BAD_REQUEST_MESSAGE.to_string())
        })?;
        Ok(AppJson(value))
    }
}

/// Plant id from a `/plants/{id}` path.
///
/// An id that is not an integer cannot name a plant, so it is answered with
/// the same 404 as an unknown id.
#[derive(Debug, Clone, Copy)]
pub struct PlantId(pub DbId);

impl<S> FromRequestParts<S> for PlantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Unparseable plant id");
                AppError::NotFound(format!("{PLANT_ENTITY} not found"))
            })?;
        Ok(PlantId(id))
    }
}
