//! Driver endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

use crate::http::response::invalid_body;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::standings::driver::{Driver, DriverId};
use crate::standings::error::StandingsResult;
use crate::standings::validation::{validate_create, validate_position, validate_update};

pub async fn list_drivers(State(state): State<AppState>) -> Json<Vec<Driver>> {
    let store = state.drivers.read().await;
    Json(store.list().to_vec())
}

pub async fn driver_standing(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> StandingsResult<Json<Driver>> {
    let store = state.drivers.read().await;
    let position = validate_position(&position, store.len())?;
    Ok(Json(store.get_by_position(position)?.clone()))
}

pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StandingsResult<Json<Driver>> {
    let store = state.drivers.read().await;
    Ok(Json(store.get_by_id(&DriverId::from(id))?.clone()))
}

pub async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> StandingsResult<Json<Driver>> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let new_driver = validate_create(&payload)?;

    let mut store = state.drivers.write().await;
    let driver = store.create(new_driver)?;
    metrics::record_driver_count(store.len());

    tracing::info!(id = %driver.id, name = %driver.name, points = driver.points, "Driver created");
    Ok(Json(driver))
}

pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> StandingsResult<Json<Driver>> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let patch = validate_update(&payload)?;

    let mut store = state.drivers.write().await;
    let driver = store.update(&DriverId::from(id), &patch)?;

    tracing::info!(id = %driver.id, points = driver.points, "Driver updated");
    Ok(Json(driver))
}

pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StandingsResult<Json<Driver>> {
    let mut store = state.drivers.write().await;
    let removed = store.delete(&DriverId::from(id))?;
    metrics::record_driver_count(store.len());

    tracing::info!(id = %removed.id, name = %removed.name, "Driver deleted");
    Ok(Json(removed))
}
