//! Roll resolution rules
//!
//! Data flows one way: the actor snapshot and the request are resolved into
//! a [`RollPlan`] (every lookup happens there), the plan is executed against
//! an injected dice source into a [`RollOutcome`], and [`present`] turns the
//! outcome into a [`RollMessage`].
//!
//! Dice sources are plain closures `FnMut(min, max) -> i32` returning an
//! inclusive draw, so the rules stay free of any RNG dependency.

mod dice;
mod modifier;
mod outcome;
mod plan;
mod presenter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub use dice::{roll_pool, DicePool, PoolSize, DIE_FACES, SUCCESS_FACE};
pub use modifier::{resolve_modifier, ModifierSource, ResolvedModifier, UNTRAINED_PENALTY};
pub use outcome::{
    classify_legacy, classify_success_count, legacy_critical, LegacyCritical, LegacyTier,
    ResultCode,
};
pub use plan::{plan_roll, RollOutcome, RollPlan, RollRequest};
pub use presenter::{present, RollMessage};

/// Classifier rule generation, chosen once at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleRevision {
    /// Count faces above 3 against the difficulty threshold
    #[default]
    SuccessCount,
    /// Sum a pool of attribute dice and read the total on a fixed ladder
    LegacyPool,
}

impl RuleRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleRevision::SuccessCount => "success_count",
            RuleRevision::LegacyPool => "legacy_pool",
        }
    }
}

impl fmt::Display for RuleRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleRevision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "success_count" => Ok(Self::SuccessCount),
            "legacy_pool" | "legacy" => Ok(Self::LegacyPool),
            _ => Err(DomainError::parse(format!("Unknown rule revision: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_revision_parses_config_values() {
        assert_eq!(
            "success_count".parse::<RuleRevision>().unwrap(),
            RuleRevision::SuccessCount
        );
        assert_eq!(
            "Legacy-Pool".parse::<RuleRevision>().unwrap(),
            RuleRevision::LegacyPool
        );
        assert!("d20".parse::<RuleRevision>().is_err());
        assert_eq!(RuleRevision::default().to_string(), "success_count");
    }
}
