//! Team endpoints. Teams are recomputed from the roster on every request.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::http::server::AppState;
use crate::standings::error::StandingsResult;
use crate::standings::teams::{self, Team};
use crate::standings::validation::validate_position;

async fn current_teams(state: &AppState) -> Vec<Team> {
    let roster = state.roster.current();
    let store = state.drivers.read().await;
    teams::list_teams(&roster, store.list())
}

pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<Team>> {
    Json(current_teams(&state).await)
}

pub async fn team_standing(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> StandingsResult<Json<Team>> {
    let teams = current_teams(&state).await;
    let position = validate_position(&position, teams.len())?;
    Ok(Json(teams::team_by_position(&teams, position)?.clone()))
}
