//! BSON document shapes stored in MongoDB
//!
//! These structs mirror the stored documents exactly and convert into domain
//! entities on the way out. Identities are kept as `ObjectId` here and only
//! become hex strings once they leave the infrastructure layer.

use bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::player::{NewPlayer, Player};
use crate::domain::team::{NewTeam, Team};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PlayerDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    pub position: String,
    pub created_at: BsonDateTime,
}

impl PlayerDocument {
    /// Stamps a fresh identity and creation time onto a validated draft
    pub fn stamp(player: &NewPlayer, now: BsonDateTime) -> Self {
        Self {
            id: ObjectId::new(),
            name: player.name().to_string(),
            nickname: player.nickname().to_string(),
            position: player.position().to_string(),
            created_at: now,
        }
    }
}

impl From<PlayerDocument> for Player {
    fn from(doc: PlayerDocument) -> Self {
        Player::from_persistence(
            doc.id.to_hex(),
            doc.name,
            doc.nickname,
            doc.position,
            doc.created_at.to_chrono(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TeamDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub players: Vec<PlayerDocument>,
    pub created_at: BsonDateTime,
}

impl TeamDocument {
    /// Stamps identities and creation time onto a team and its whole roster
    pub fn stamp(team: &NewTeam, now: BsonDateTime) -> Self {
        Self {
            id: ObjectId::new(),
            name: team.name().to_string(),
            description: team.description().to_string(),
            location: team.location().to_string(),
            players: team
                .players()
                .iter()
                .map(|p| PlayerDocument::stamp(p, now))
                .collect(),
            created_at: now,
        }
    }
}

impl From<TeamDocument> for Team {
    fn from(doc: TeamDocument) -> Self {
        Team::from_persistence(
            doc.id.to_hex(),
            doc.name,
            doc.description,
            doc.location,
            doc.players.into_iter().map(Player::from).collect(),
            doc.created_at.to_chrono(),
        )
    }
}
