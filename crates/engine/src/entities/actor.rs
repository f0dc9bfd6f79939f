//! Actor entity operations.

use std::sync::Arc;

use arlenor_domain::{self as domain, ActorId};

use crate::infrastructure::ports::{ActorRepo, RepoError};

/// Actor entity operations.
pub struct Actor {
    repo: Arc<dyn ActorRepo>,
}

impl Actor {
    pub fn new(repo: Arc<dyn ActorRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: ActorId) -> Result<Option<domain::Actor>, RepoError> {
        self.repo.get(id).await
    }

    /// Look an actor up by id, or by exact name when the reference is not an id.
    pub async fn resolve(&self, reference: &str) -> Result<Option<domain::Actor>, RepoError> {
        match reference.parse::<ActorId>() {
            Ok(id) => self.repo.get(id).await,
            Err(_) => self.repo.find_by_name(reference.trim()).await,
        }
    }
}
