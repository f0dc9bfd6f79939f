//! Actor store port.

use arlenor_domain::{Actor, ActorId};
use async_trait::async_trait;

use super::error::RepoError;

/// Read-only access to actor snapshots owned by the host's document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepo: Send + Sync {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError>;
    /// First actor with this exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, RepoError>;
}
