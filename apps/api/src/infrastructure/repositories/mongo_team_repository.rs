use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::documents::TeamDocument;
use super::TEAMS_COLLECTION;
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{NewTeam, Team};

/// MongoDB implementation of TeamRepository
///
/// Rosters are embedded in the team document, so reads need no join and a
/// team is persisted with a single insert.
#[derive(Clone)]
pub struct MongoTeamRepository {
    collection: Collection<TeamDocument>,
}

impl MongoTeamRepository {
    /// Creates a new MongoTeamRepository
    ///
    /// # Arguments
    /// * `db` - Database handle; clones share the driver's connection pool
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(TEAMS_COLLECTION),
        }
    }
}

#[async_trait]
impl TeamRepository for MongoTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        const OP: &str = "TeamRepository::list";

        let docs: Vec<TeamDocument> = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?
            .try_collect()
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        Ok(docs.into_iter().map(Team::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, RepositoryError> {
        const OP: &str = "TeamRepository::find_by_id";

        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let doc = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        Ok(doc.map(Team::from))
    }

    async fn create(&self, team: NewTeam) -> Result<Team, RepositoryError> {
        const OP: &str = "TeamRepository::create";

        let doc = TeamDocument::stamp(&team, BsonDateTime::now());
        let id = doc.id.to_hex();

        self.collection
            .insert_one(&doc, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        tracing::debug!(team_id = %id, players = doc.players.len(), "team inserted");

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepositoryError::new(OP, format!("inserted team {} not found", id)))
    }
}
