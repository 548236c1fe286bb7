use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::documents::PlayerDocument;
use super::PLAYERS_COLLECTION;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::{PlayerRepository, RepositoryError};

/// MongoDB implementation of PlayerRepository
///
/// Stores each player as its own document in the `players` collection.
#[derive(Clone)]
pub struct MongoPlayerRepository {
    collection: Collection<PlayerDocument>,
}

impl MongoPlayerRepository {
    /// Creates a new MongoPlayerRepository
    ///
    /// # Arguments
    /// * `db` - Database handle; clones share the driver's connection pool
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PLAYERS_COLLECTION),
        }
    }
}

#[async_trait]
impl PlayerRepository for MongoPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>, RepositoryError> {
        const OP: &str = "PlayerRepository::list";

        let docs: Vec<PlayerDocument> = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?
            .try_collect()
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        Ok(docs.into_iter().map(Player::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        const OP: &str = "PlayerRepository::find_by_id";

        // A malformed id cannot match any stored document
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let doc = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        Ok(doc.map(Player::from))
    }

    async fn create(&self, player: NewPlayer) -> Result<Player, RepositoryError> {
        const OP: &str = "PlayerRepository::create";

        let doc = PlayerDocument::stamp(&player, BsonDateTime::now());
        let id = doc.id.to_hex();

        self.collection
            .insert_one(&doc, None)
            .await
            .map_err(|e| RepositoryError::new(OP, e))?;

        tracing::debug!(player_id = %id, "player inserted");

        // Read back so store-assigned fields in the response are authoritative
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepositoryError::new(OP, format!("inserted player {} not found", id)))
    }
}
