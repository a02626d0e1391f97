//! Handlers for the `/plants` resource.

use axum::extract::State;
use axum::http::StatusCode;
use plantsy_core::error::CoreError;
use plantsy_core::plant::PLANT_ENTITY;
use plantsy_core::types::DbId;
use plantsy_db::models::plant::{CreatePlant, Plant, UpdatePlant};
use plantsy_db::repositories::PlantRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, PlantId};
use crate::response::PrettyJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PLANT_ENTITY,
        id,
    })
}

/// GET /plants
pub async fn list(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<Plant>>> {
    let plants = PlantRepo::list(&state.pool).await?;
    tracing::debug!(count = plants.len(), "Listed plants");
    Ok(PrettyJson(plants))
}

/// GET /plants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PlantId(id): PlantId,
) -> AppResult<PrettyJson<Plant>> {
    let plant = PlantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(PrettyJson(plant))
}

/// POST /plants
///
/// Omitted keys are stored as null, except `is_in_stock` which defaults to
/// `true` when omitted or null. A missing `name` is rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlant>,
) -> AppResult<(StatusCode, PrettyJson<Plant>)> {
    let new_plant = input.validate()?;
    let plant = PlantRepo::create(&state.pool, &new_plant).await?;

    tracing::info!(plant_id = plant.id, plant = %plant, "Plant created");

    Ok((StatusCode::CREATED, PrettyJson(plant)))
}

/// PATCH /plants/{id}
///
/// The id is resolved before the body is looked at, so an unknown id is a 404
/// whatever the payload. Overwrites exactly the recognised keys present in the
/// body, including explicit nulls for every field except `name`.
pub async fn update(
    State(state): State<AppState>,
    PlantId(id): PlantId,
    body: Result<AppJson<UpdatePlant>, AppError>,
) -> AppResult<PrettyJson<Plant>> {
    let current = PlantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let AppJson(input) = body?;
    let changes = input.validate()?;
    if changes.is_empty() {
        return Ok(PrettyJson(current));
    }

    let plant = PlantRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(plant_id = id, plant = %plant, "Plant updated");

    Ok(PrettyJson(plant))
}

/// DELETE /plants/{id}
pub async fn delete(State(state): State<AppState>, PlantId(id): PlantId) -> AppResult<StatusCode> {
    let deleted = PlantRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(plant_id = id, "Plant deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
