use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;
use crate::domain::player::{NewPlayer, Player};

/// Team aggregate root
///
/// Owns an ordered roster of players. The roster is stored inside the team
/// document, so a team and its players are always written together.
///
/// # Invariants
/// - Identity and creation timestamp are assigned once by the store
/// - Every roster player carries its own identity and creation timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: String,
    name: String,
    description: String,
    location: String,
    players: Vec<Player>,
    created_at: DateTime<Utc>,
}

impl Team {
    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-text description, empty when none was given
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the team's location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses validation since the data was validated before
    /// it was stored.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: String,
        name: String,
        description: String,
        location: String,
        players: Vec<Player>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            location,
            players,
            created_at,
        }
    }
}

/// Validated input for a team that has not been persisted yet
///
/// # Example
/// ```
/// use soccer_api::domain::player::NewPlayer;
/// use soccer_api::domain::team::NewTeam;
///
/// let team = NewTeam::new("Juventus", "", "Turin")
///     .expect("valid team")
///     .with_players(vec![NewPlayer::roster_entry("Ronaldo", "", "Forward").unwrap()]);
///
/// assert_eq!(team.players().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    name: String,
    description: String,
    location: String,
    players: Vec<NewPlayer>,
}

impl NewTeam {
    /// Creates a team draft with an empty roster
    ///
    /// # Business Rules Enforced
    /// - Name must not be empty
    /// - Location must not be empty
    ///
    /// Description is free text and may be empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (name, description, location) = (name.into(), description.into(), location.into());

        ValidationError::require("name", &name)?;
        ValidationError::require("location", &location)?;

        Ok(Self {
            name,
            description,
            location,
            players: Vec::new(),
        })
    }

    /// Replaces the roster with already validated players
    pub fn with_players(mut self, players: Vec<NewPlayer>) -> Self {
        self.players = players;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn players(&self) -> &[NewPlayer] {
        &self.players
    }
}
