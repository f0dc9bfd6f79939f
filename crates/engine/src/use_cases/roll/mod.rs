//! Roll use cases.
//!
//! A roll runs in two steps:
//! 1. `prepare` loads the actor and resolves every lookup (modifier,
//!    difficulty, bonus/malus). Nothing is rolled yet.
//! 2. `commit` rolls, classifies, presents and posts to the chat.
//!
//! Dropping a [`PreparedRoll`] cancels the roll without any side effect.

use std::sync::Arc;

use arlenor_domain::{
    plan_roll, present, Actor as DomainActor, ActorId, ReferenceTables, RollError, RollMessage,
    RollOutcome, RollPlan, RollRequest, RuleRevision,
};

use crate::entities::Actor;
use crate::infrastructure::ports::{ChatEntry, ChatPort, ClockPort, RandomPort, RepoError};

/// Container for roll use cases.
pub struct RollUseCases {
    pub roll_skill: Arc<RollSkill>,
}

impl RollUseCases {
    pub fn new(roll_skill: Arc<RollSkill>) -> Self {
        Self { roll_skill }
    }
}

/// A roll whose lookups all succeeded, waiting to be thrown.
#[derive(Debug, Clone)]
pub struct PreparedRoll {
    actor: DomainActor,
    plan: RollPlan,
}

impl PreparedRoll {
    pub fn actor(&self) -> &DomainActor {
        &self.actor
    }

    pub fn plan(&self) -> &RollPlan {
        &self.plan
    }
}

/// Result of a committed roll.
#[derive(Debug, Clone)]
pub struct RollResult {
    pub outcome: RollOutcome,
    pub message: RollMessage,
    /// Whether the chat accepted the message
    pub delivered: bool,
}

/// Roll an attribute, optionally with a skill, power or crystal.
pub struct RollSkill {
    actor: Arc<Actor>,
    chat: Arc<dyn ChatPort>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    tables: Arc<ReferenceTables>,
    revision: RuleRevision,
}

impl RollSkill {
    pub fn new(
        actor: Arc<Actor>,
        chat: Arc<dyn ChatPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        tables: Arc<ReferenceTables>,
        revision: RuleRevision,
    ) -> Self {
        Self {
            actor,
            chat,
            random,
            clock,
            tables,
            revision,
        }
    }

    pub fn revision(&self) -> RuleRevision {
        self.revision
    }

    /// Resolve every lookup for a roll. Fails before any die is rolled.
    pub async fn prepare(
        &self,
        actor_id: ActorId,
        request: &RollRequest,
    ) -> Result<PreparedRoll, RollSkillError> {
        let actor = self
            .actor
            .get(actor_id)
            .await?
            .ok_or_else(|| RollSkillError::ActorNotFound(actor_id.to_string()))?;

        let plan = plan_roll(&actor, request, &self.tables, self.revision).map_err(|e| {
            tracing::warn!(actor_id = %actor_id, error = %e, "Roll rejected");
            RollSkillError::Roll(e)
        })?;

        if plan.pool.was_clamped() {
            tracing::warn!(
                actor_id = %actor_id,
                requested = plan.pool.requested(),
                "Negative dice pool clamped to zero"
            );
        }
        tracing::debug!(
            actor_id = %actor_id,
            label = %plan.label,
            pool = plan.pool.dice(),
            threshold = plan.threshold,
            health_penalty = plan.health_penalty,
            revision = %plan.revision,
            "Roll prepared"
        );

        Ok(PreparedRoll { actor, plan })
    }

    /// Throw a prepared roll and post the result.
    ///
    /// A chat failure is logged and reported through `delivered`; the roll
    /// itself still stands.
    pub async fn commit(&self, prepared: PreparedRoll) -> Result<RollResult, RollSkillError> {
        let PreparedRoll { actor, plan } = prepared;

        let outcome = plan.execute(&mut |min, max| self.random.gen_range(min, max));
        let message = present(&actor, &plan, &outcome, &self.tables).map_err(|e| {
            tracing::error!(actor_id = %actor.id, error = %e, "Roll result has no table entry");
            RollSkillError::Roll(e)
        })?;

        tracing::info!(
            actor_id = %actor.id,
            label = %plan.label,
            dice = ?outcome.dice,
            total = outcome.total,
            result_code = %outcome.code,
            "Roll committed"
        );

        let entry = ChatEntry {
            sent_at: self.clock.now(),
            revision: plan.revision,
            message,
        };
        let delivered = match self.chat.post(&entry).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(actor_id = %actor.id, error = %e, "Failed to post roll to chat");
                false
            }
        };

        Ok(RollResult {
            outcome,
            message: entry.message,
            delivered,
        })
    }

    /// Prepare and commit in one go.
    pub async fn execute(
        &self,
        actor_id: ActorId,
        request: &RollRequest,
    ) -> Result<RollResult, RollSkillError> {
        let prepared = self.prepare(actor_id, request).await?;
        self.commit(prepared).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RollSkillError {
    #[error("Actor not found: {0}")]
    ActorNotFound(String),
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl RollSkillError {
    /// Short player-facing notice, when the error is one the player can act on.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Roll(e) if e.is_user_facing() => Some(e.notice()),
            Self::ActorNotFound(_) => Some("Il n'y a pas de personnage valide.".to_string()),
            _ => None,
        }
    }
}
