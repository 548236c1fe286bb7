use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::AppState;
use crate::domain::player::{NewPlayer, Player};

/// Request body describing a player
///
/// Missing or `null` fields deserialize as empty strings so they surface
/// as validation errors rather than parse errors. Any `id` or `created_at`
/// sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PlayerRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
}

/// Player as returned by the API
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().to_string(),
            name: player.name().to_string(),
            nickname: player.nickname().to_string(),
            position: player.position().to_string(),
            created_at: player.created_at(),
        }
    }
}

/// List all players
///
/// GET /players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<PlayerResponse>>, ApiError> {
    let players = state.players.list().await?;

    Ok(ApiResponse::ok(
        players.iter().map(PlayerResponse::from).collect(),
    ))
}

/// Get a player by ID
///
/// GET /players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<PlayerResponse>, ApiError> {
    let player = state
        .players
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("cannot find the requested player"))?;

    Ok(ApiResponse::ok(PlayerResponse::from(&player)))
}

/// Create a new player
///
/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<ApiResponse<PlayerResponse>, ApiError> {
    let Json(req) = payload?;

    let player = NewPlayer::new(req.name, req.nickname, req.position)?;
    let player = state.players.create(player).await?;

    tracing::info!(player_id = player.id(), "player created");

    Ok(ApiResponse::created(PlayerResponse::from(&player)))
}
