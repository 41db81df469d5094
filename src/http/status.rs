use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct SystemStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub drivers: usize,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let drivers = state.drivers.read().await.len();
    Json(SystemStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        drivers,
    })
}
