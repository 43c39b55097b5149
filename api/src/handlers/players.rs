//! Player presence handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AppState;
use presence_core::domain::{Player, PlayerInput};

/// List all players
pub async fn list_players(State(state): State<AppState>) -> ApiResult<Json<Vec<Player>>> {
    let players = state.players.list().await?;
    Ok(Json(players))
}

/// Get player by ID
pub async fn get_player(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Player>> {
    let Path(id) = id?;
    let player = state.players.get(id).await?;
    Ok(Json(player))
}

/// Create a new player
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerInput>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let Json(input) = payload?;
    let player = state.players.create(&input).await?;

    info!(id = player.id, "Created player");
    Ok(Json(player))
}

/// Replace a player's fields.
///
/// A missing row is not an error; nothing is created in that case.
pub async fn update_player(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PlayerInput>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let affected = state.players.update(id, &input).await?;
    if affected == 0 {
        debug!(id, "Update matched no player");
    }

    Ok(Json(input.into_player(id)))
}

/// Delete one player
pub async fn delete_player(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let affected = state.players.delete(id).await?;
    debug!(id, affected, "Deleted player");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete every player
pub async fn delete_all_players(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let affected = state.players.delete_all().await?;
    info!(affected, "Deleted all players");

    Ok(StatusCode::NO_CONTENT)
}
