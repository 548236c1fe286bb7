use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;

/// Player entity
///
/// A player either stands alone in the player collection or is embedded in
/// a team's roster. Identity and creation time are assigned by the store and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: String,
    name: String,
    nickname: String,
    position: String,
    created_at: DateTime<Utc>,
}

impl Player {
    /// Returns the store-assigned identity
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Bypasses validation: roster players are stored with whatever nickname
    /// the team payload carried, including an empty one.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: String,
        name: String,
        nickname: String,
        position: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            nickname,
            position,
            created_at,
        }
    }
}

/// Validated input for a player that has not been persisted yet
///
/// # Invariants
/// - Name and position are never empty
/// - Nickname is never empty for standalone players (see [`NewPlayer::new`])
///
/// # Example
/// ```
/// use soccer_api::domain::player::NewPlayer;
///
/// let player = NewPlayer::new("Ronaldo", "CR7", "Forward").expect("valid player");
/// assert_eq!(player.nickname(), "CR7");
///
/// let err = NewPlayer::new("Ronaldo", "", "Forward").unwrap_err();
/// assert_eq!(err.to_string(), "nickname cannot be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    name: String,
    nickname: String,
    position: String,
}

impl NewPlayer {
    /// Creates a standalone player draft
    ///
    /// # Business Rules Enforced
    /// Checked in order, first violation wins:
    /// - Name must not be empty
    /// - Nickname must not be empty
    /// - Position must not be empty
    pub fn new(
        name: impl Into<String>,
        nickname: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (name, nickname, position) = (name.into(), nickname.into(), position.into());

        ValidationError::require("name", &name)?;
        ValidationError::require("nickname", &nickname)?;
        ValidationError::require("position", &position)?;

        Ok(Self {
            name,
            nickname,
            position,
        })
    }

    /// Creates a player draft for a team roster
    ///
    /// Roster entries only require a name and a position; the nickname may
    /// be left empty. Errors are prefixed with "player" so the client can
    /// tell them apart from the team's own fields.
    pub fn roster_entry(
        name: impl Into<String>,
        nickname: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (name, nickname, position) = (name.into(), nickname.into(), position.into());

        ValidationError::require("player name", &name)?;
        ValidationError::require("player position", &position)?;

        Ok(Self {
            name,
            nickname,
            position,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}
