//! Actor sheet use case: derived values for display.

use std::sync::Arc;

use arlenor_domain::{ActorId, ActorKind, DerivedActor, ItemGroups, ReferenceTables};
use serde::Serialize;

use crate::entities::Actor;
use crate::infrastructure::ports::RepoError;

/// Everything the sheet shows that is not stored on the actor.
#[derive(Debug, Clone, Serialize)]
pub struct SheetView {
    pub actor_id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    /// Display name of the race, when it is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    pub health_status: String,
    #[serde(flatten)]
    pub derived: DerivedActor,
    pub items: ItemGroups,
}

pub struct ActorSheet {
    actor: Arc<Actor>,
    tables: Arc<ReferenceTables>,
}

impl ActorSheet {
    pub fn new(actor: Arc<Actor>, tables: Arc<ReferenceTables>) -> Self {
        Self { actor, tables }
    }

    /// Build the sheet for an actor id or name.
    pub async fn execute(&self, reference: &str) -> Result<SheetView, SheetError> {
        let actor = self
            .actor
            .resolve(reference)
            .await?
            .ok_or_else(|| SheetError::ActorNotFound(reference.to_string()))?;

        let derived = actor.derived(&self.tables);
        let race = match actor.kind {
            ActorKind::Character => actor
                .race
                .as_deref()
                .and_then(|code| self.tables.race(code))
                .map(|race| race.name.clone()),
            ActorKind::Creature => None,
        };

        Ok(SheetView {
            actor_id: actor.id,
            name: actor.name.clone(),
            kind: actor.kind,
            race,
            health_status: derived.health.indicator.to_string(),
            items: actor.grouped_items(),
            derived,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Actor not found: {0}")]
    ActorNotFound(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
