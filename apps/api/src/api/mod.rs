// API layer module (adapters for HTTP)
// Handlers receive their repositories through `AppState`

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod response;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::domain::repositories::{PlayerRepository, TeamRepository};
use handlers::{health, players, teams};
use middleware::recover::method_not_allowed;

/// Shared application state
///
/// Built once at startup and cloned into every request; clones share the
/// same repository instances.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    /// Creates the state from concrete repository implementations
    pub fn new(
        players: impl PlayerRepository + 'static,
        teams: impl TeamRepository + 'static,
    ) -> Self {
        Self {
            players: Arc::new(players),
            teams: Arc::new(teams),
        }
    }
}

/// Builds the application router
///
/// Every response, including unknown routes, unsupported methods and
/// handler panics, is wrapped in the response envelope.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(method_not_allowed),
        )
        .route(
            "/players",
            get(players::list_players)
                .post(players::create_player)
                .fallback(method_not_allowed),
        )
        .route(
            "/players/:id",
            get(players::get_player).fallback(method_not_allowed),
        )
        .route(
            "/teams",
            get(teams::list_teams)
                .post(teams::create_team)
                .fallback(method_not_allowed),
        )
        .route(
            "/teams/:id",
            get(teams::get_team).fallback(method_not_allowed),
        )
        .fallback(middleware::recover::not_found)
        .layer(CatchPanicLayer::custom(middleware::recover::handle_panic))
        .with_state(state)
}
