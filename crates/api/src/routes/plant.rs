//! Route definitions for the `/plants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::plant;
use crate::state::AppState;

/// Plant routes.
///
/// ```text
/// GET    /plants         -> list
/// POST   /plants         -> create
/// GET    /plants/{id}    -> get_by_id
/// PATCH  /plants/{id}    -> update
/// DELETE /plants/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plants", get(plant::list).post(plant::create))
        .route(
            "/plants/{id}",
            get(plant::get_by_id)
                .patch(plant::update)
                .delete(plant::delete),
        )
}
