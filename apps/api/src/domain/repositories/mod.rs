// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod player_repository;
pub mod team_repository;

use thiserror::Error;

pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;

/// Failure reported by a repository implementation
///
/// Carries the name of the repository operation that failed so the message
/// surfaced to the client identifies where the storage call broke.
#[derive(Debug, Error)]
#[error("{operation}: {message}")]
pub struct RepositoryError {
    operation: &'static str,
    message: String,
}

impl RepositoryError {
    /// Wraps a lower-level error with the failing operation's name
    pub fn new(operation: &'static str, source: impl std::fmt::Display) -> Self {
        Self {
            operation,
            message: source.to_string(),
        }
    }

    /// Returns the name of the failing operation
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_prefixed_with_operation() {
        let err = RepositoryError::new("PlayerRepository::list", "connection refused");

        assert_eq!(err.operation(), "PlayerRepository::list");
        assert_eq!(err.to_string(), "PlayerRepository::list: connection refused");
    }
}
