use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::team::{NewTeam, Team};

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams together with
/// their rosters. Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// List every team, each with its roster populated
    async fn list(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Find a team by its ID
    ///
    /// Returns `Ok(None)` both when nothing matches and when `id` is not a
    /// well-formed identity.
    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError>;

    /// Persist a new team with its roster and return the stored record
    ///
    /// Either the whole team is written or nothing is.
    async fn create(&self, team: NewTeam) -> Result<Team, RepositoryError>;
}
