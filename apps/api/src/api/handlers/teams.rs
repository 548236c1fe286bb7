use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::players::{PlayerRequest, PlayerResponse};
use crate::api::errors::ApiError;
use crate::api::response::ApiResponse;
use crate::api::AppState;
use crate::domain::player::NewPlayer;
use crate::domain::team::{NewTeam, Team};

/// Request body for creating a team
///
/// A `null` roster entry is read as a player with every field empty.
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Option<PlayerRequest>>,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub players: Vec<PlayerResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            description: team.description().to_string(),
            location: team.location().to_string(),
            players: team.players().iter().map(PlayerResponse::from).collect(),
            created_at: team.created_at(),
        }
    }
}

/// List all teams with their rosters
///
/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.list().await?;

    Ok(ApiResponse::ok(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("cannot find the requested team"))?;

    Ok(ApiResponse::ok(TeamResponse::from(&team)))
}

/// Create a new team, optionally with an initial roster
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<ApiResponse<TeamResponse>, ApiError> {
    let Json(req) = payload?;

    let team = NewTeam::new(req.name, req.description, req.location)?;

    // One invalid roster entry rejects the whole team
    let players = req
        .players
        .into_iter()
        .map(Option::unwrap_or_default)
        .map(|p| NewPlayer::roster_entry(p.name, p.nickname, p.position))
        .collect::<Result<Vec<_>, _>>()?;

    let team = state.teams.create(team.with_players(players)).await?;

    tracing::info!(
        team_id = team.id(),
        players = team.players().len(),
        "team created"
    );

    Ok(ApiResponse::created(TeamResponse::from(&team)))
}
