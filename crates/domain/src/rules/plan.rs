//! Roll planning and execution
//!
//! [`plan_roll`] does every lookup and fails before any die is thrown.
//! [`RollPlan::execute`] only draws dice and classifies them; it cannot fail.

use serde::{Deserialize, Serialize};

use super::dice::{DicePool, PoolSize};
use super::modifier::{resolve_modifier, ModifierSource, ResolvedModifier};
use super::outcome::{
    classify_legacy, classify_success_count, legacy_critical, LegacyCritical, LegacyTier,
    ResultCode,
};
use super::RuleRevision;
use crate::entities::Actor;
use crate::error::RollError;
use crate::value_objects::{
    AttributeKey, ReferenceTables, DEFAULT_DIFFICULTY, NEUTRAL_BONUS_MALUS,
};

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    pub attribute: AttributeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ModifierSource>,
    /// Key into the bonus/malus table
    pub bonus_malus: String,
    /// Key into the difficulty table
    pub difficulty: String,
}

impl RollRequest {
    pub fn new(attribute: AttributeKey) -> Self {
        Self {
            attribute,
            modifier: None,
            bonus_malus: NEUTRAL_BONUS_MALUS.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }

    pub fn with_modifier(mut self, modifier: ModifierSource) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_bonus_malus(mut self, code: impl Into<String>) -> Self {
        self.bonus_malus = code.into();
        self
    }

    pub fn with_difficulty(mut self, code: impl Into<String>) -> Self {
        self.difficulty = code.into();
        self
    }
}

/// A fully resolved roll, ready to be thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollPlan {
    pub revision: RuleRevision,
    pub label: String,
    pub attribute: AttributeKey,
    /// Nominal attribute value, before the health penalty
    pub attribute_value: i32,
    pub health_penalty: i32,
    pub modifier: Option<ResolvedModifier>,
    pub bonus_malus: i32,
    /// Success faces required
    pub threshold: u8,
    pub pool: PoolSize,
}

impl RollPlan {
    /// Flat amount added to the dice when computing the total.
    pub fn flat_bonus(&self) -> i32 {
        let modifier = self.modifier.as_ref().map(|m| m.value).unwrap_or(0);
        match self.revision {
            RuleRevision::SuccessCount => modifier,
            RuleRevision::LegacyPool => modifier + self.bonus_malus,
        }
    }

    pub fn execute<R>(&self, rng: &mut R) -> RollOutcome
    where
        R: FnMut(i32, i32) -> i32,
    {
        let mut pool = DicePool::roll(self.pool, rng);

        let critical = match self.revision {
            RuleRevision::LegacyPool => legacy_critical(pool.sum(), self.pool.dice()),
            RuleRevision::SuccessCount => None,
        };
        if critical == Some(LegacyCritical::Success) {
            pool.roll_extra(rng);
        }

        // An empty pool scores nothing, flat bonuses included.
        let total = if pool.is_empty() {
            0
        } else {
            pool.total() + self.flat_bonus()
        };
        let code = match self.revision {
            RuleRevision::SuccessCount => classify_success_count(&pool.values, self.threshold),
            RuleRevision::LegacyPool => classify_legacy(pool.values.len(), total, critical),
        };
        let tier = match critical {
            Some(LegacyCritical::Failure) => None,
            _ => Some(LegacyTier::from_total(total)),
        };

        RollOutcome {
            successes: pool.successes(),
            dice_total: pool.sum(),
            dice: pool.values,
            extra_die: pool.extra,
            total,
            code,
            tier,
            critical,
        }
    }
}

/// Result of one throw. Discarded once presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub dice: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_die: Option<u8>,
    pub successes: usize,
    /// Sum of `dice` only
    pub dice_total: i32,
    /// Dice, extra die and flat bonuses
    pub total: i32,
    pub code: ResultCode,
    /// Ladder annotation, absent after a legacy critical failure
    pub tier: Option<LegacyTier>,
    pub critical: Option<LegacyCritical>,
}

fn roll_label(
    attribute_name: &str,
    attribute: AttributeKey,
    modifier: Option<&ResolvedModifier>,
    bonus_malus: i32,
) -> String {
    let mut label = match modifier {
        None => attribute_name.to_string(),
        Some(m) => match m.source {
            ModifierSource::Skill(_) | ModifierSource::Attribute(_) => {
                format!("{} ({})", m.label, attribute.code())
            }
            ModifierSource::Power(_) | ModifierSource::Crystal(_) => m.label.clone(),
        },
    };
    if bonus_malus > 0 {
        label.push_str(" avec bonus");
    } else if bonus_malus < 0 {
        label.push_str(" avec malus");
    }
    label
}

/// Resolve a request against an actor snapshot.
///
/// Fails with the first missing lookup: modifier, then difficulty, then
/// bonus/malus. The actor is only read.
pub fn plan_roll(
    actor: &Actor,
    request: &RollRequest,
    tables: &ReferenceTables,
    revision: RuleRevision,
) -> Result<RollPlan, RollError> {
    let attribute = actor
        .attributes
        .get(request.attribute)
        .ok_or_else(|| {
            RollError::modifier_not_found(ModifierSource::Attribute(request.attribute))
        })?;

    let modifier = request
        .modifier
        .as_ref()
        .map(|source| resolve_modifier(actor, source))
        .transpose()?;
    let threshold = tables.difficulty(&request.difficulty)?.value;
    let bonus_malus = tables.bonus_malus(&request.bonus_malus)?.value;

    let health_penalty = actor.health_penalty(tables);
    let pool = match revision {
        RuleRevision::SuccessCount => {
            PoolSize::new(attribute.value + health_penalty + bonus_malus)
        }
        RuleRevision::LegacyPool => PoolSize::new(attribute.value + health_penalty),
    };

    Ok(RollPlan {
        revision,
        label: roll_label(&attribute.name, request.attribute, modifier.as_ref(), bonus_malus),
        attribute: request.attribute,
        attribute_value: attribute.value,
        health_penalty,
        modifier,
        bonus_malus,
        threshold,
        pool,
    })
}
