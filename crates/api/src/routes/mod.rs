pub mod plant;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plants                 list, create
/// /plants/{id}            get, patch, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(plant::router())
}
