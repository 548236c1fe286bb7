//! Shared test support: in-memory repositories and request helpers

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bson::oid::ObjectId;
use chrono::Utc;
use serde_json::Value;
use soccer_api::api::{self, AppState};
use soccer_api::domain::player::{NewPlayer, Player};
use soccer_api::domain::repositories::{PlayerRepository, RepositoryError, TeamRepository};
use soccer_api::domain::team::{NewTeam, Team};
use tower::util::ServiceExt; // for oneshot

fn stamp(player: &NewPlayer) -> Player {
    Player::from_persistence(
        ObjectId::new().to_hex(),
        player.name().to_string(),
        player.nickname().to_string(),
        player.position().to_string(),
        Utc::now(),
    )
}

/// Player repository backed by a vector
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: Mutex<Vec<Player>>,
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>, RepositoryError> {
        Ok(self.players.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError> {
        let player = stamp(&player);
        self.players.lock().unwrap().push(player.clone());
        Ok(player)
    }
}

/// Team repository backed by a vector
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: Mutex<Vec<Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        Ok(self.teams.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn create(&self, team: NewTeam) -> Result<Team, RepositoryError> {
        let team = Team::from_persistence(
            ObjectId::new().to_hex(),
            team.name().to_string(),
            team.description().to_string(),
            team.location().to_string(),
            team.players().iter().map(stamp).collect(),
            Utc::now(),
        );
        self.teams.lock().unwrap().push(team.clone());
        Ok(team)
    }
}

/// Repository whose every call fails as if the database were unreachable
pub struct UnavailableRepository;

#[async_trait]
impl PlayerRepository for UnavailableRepository {
    async fn list(&self) -> Result<Vec<Player>, RepositoryError> {
        Err(RepositoryError::new("PlayerRepository::list", "connection refused"))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Player>, RepositoryError> {
        Err(RepositoryError::new(
            "PlayerRepository::find_by_id",
            "connection refused",
        ))
    }

    async fn create(&self, _player: NewPlayer) -> Result<Player, RepositoryError> {
        Err(RepositoryError::new("PlayerRepository::create", "connection refused"))
    }
}

#[async_trait]
impl TeamRepository for UnavailableRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        Err(RepositoryError::new("TeamRepository::list", "connection refused"))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Team>, RepositoryError> {
        Err(RepositoryError::new(
            "TeamRepository::find_by_id",
            "connection refused",
        ))
    }

    async fn create(&self, _team: NewTeam) -> Result<Team, RepositoryError> {
        Err(RepositoryError::new("TeamRepository::create", "connection refused"))
    }
}

/// Player repository that panics on listing
pub struct PanickingPlayerRepository;

#[async_trait]
impl PlayerRepository for PanickingPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>, RepositoryError> {
        panic!("cursor exploded");
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Player>, RepositoryError> {
        Ok(None)
    }

    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError> {
        Ok(stamp(&player))
    }
}

/// Router backed by fresh in-memory repositories
pub fn setup_app() -> Router {
    api::router(AppState::new(
        InMemoryPlayerRepository::default(),
        InMemoryTeamRepository::default(),
    ))
}

/// Router whose repositories always fail
pub fn setup_unavailable_app() -> Router {
    api::router(AppState::new(UnavailableRepository, UnavailableRepository))
}

/// Sends a request and returns the status and decoded JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, serde_json::to_string(body).unwrap())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
