//! JSON response body used by every handler and error.
//!
//! Responses are pretty-printed with a trailing newline so they read well
//! from `curl`. Use [`PrettyJson`] wherever `axum::Json` would be returned.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serialize `T` as indented JSON.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, PrettyJson(plant)))
/// ```
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut body) => {
                body.push(b'\n');
                (
                    [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    body,
                )
                    .into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    "{\"error\": \"An internal error occurred\"}\n",
                )
                    .into_response()
            }
        }
    }
}
