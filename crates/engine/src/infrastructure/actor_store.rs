//! JSON file actor store.
//!
//! The file holds an array of actor snapshots, read once on open. The engine
//! never writes it.

use std::path::Path;

use arlenor_domain::{Actor, ActorId};
use async_trait::async_trait;

use crate::infrastructure::ports::{ActorRepo, RepoError};

pub struct JsonActorRepo {
    actors: Vec<Actor>,
}

impl JsonActorRepo {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            RepoError::storage("open_actors", format!("{}: {}", path.display(), e))
        })?;
        let actors: Vec<Actor> =
            serde_json::from_str(&content).map_err(|e| RepoError::Serialization(e.to_string()))?;
        tracing::info!(path = %path.display(), actors = actors.len(), "Loaded actor snapshots");
        Ok(Self { actors })
    }
}

#[async_trait]
impl ActorRepo for JsonActorRepo {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError> {
        Ok(self.actors.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, RepoError> {
        Ok(self.actors.iter().find(|a| a.name == name).cloned())
    }
}
