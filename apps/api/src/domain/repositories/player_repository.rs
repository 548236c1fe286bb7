use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::player::{NewPlayer, Player};

/// Repository trait for standalone players
///
/// Defines the contract for persisting and retrieving players.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// List every player in natural store order
    async fn list(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Find a player by its ID
    ///
    /// Returns `Ok(None)` both when nothing matches and when `id` is not a
    /// well-formed identity.
    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError>;

    /// Persist a new player and return the stored record
    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError>;
}
