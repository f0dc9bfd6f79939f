//! Outcome classification for both rule revisions
//!
//! The success-count classifier reads the faces of the pool against a
//! difficulty threshold. The legacy scheme reads the total on a fixed
//! ladder and has its own critical triggers; its ladder is also attached to
//! success-count rolls as a second, independent annotation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dice::SUCCESS_FACE;

/// Narrative result code, keyed into the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    ResCritique,
    ResSimple,
    ResCout,
    EchecSimple,
    EchecConseq,
    EchecCritique,
}

impl ResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::ResCritique => "RES_CRITIQUE",
            ResultCode::ResSimple => "RES_SIMPLE",
            ResultCode::ResCout => "RES_COUT",
            ResultCode::EchecSimple => "ECHEC_SIMPLE",
            ResultCode::EchecConseq => "ECHEC_CONSEQ",
            ResultCode::EchecCritique => "ECHEC_CRITIQUE",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ResultCode::ResCritique | ResultCode::ResSimple | ResultCode::ResCout
        )
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a pool by success count and highest face.
///
/// A threshold of 0 or 1 is the trivial tier and reads the highest face
/// alone. A failed roll is only critical when every die shows a 1. An empty
/// pool is a critical failure.
pub fn classify_success_count(dice: &[u8], threshold: u8) -> ResultCode {
    let Some(max_face) = dice.iter().copied().max() else {
        return ResultCode::EchecCritique;
    };

    if threshold <= 1 {
        return match max_face {
            6 => ResultCode::ResCritique,
            5 => ResultCode::ResSimple,
            4 => ResultCode::ResCout,
            3 => ResultCode::EchecSimple,
            2 => ResultCode::EchecConseq,
            _ => ResultCode::EchecCritique,
        };
    }

    let successes = dice.iter().filter(|v| **v > SUCCESS_FACE).count();
    if successes < usize::from(threshold) {
        match max_face {
            5 | 6 => ResultCode::EchecSimple,
            2..=4 => ResultCode::EchecConseq,
            _ => ResultCode::EchecCritique,
        }
    } else {
        match max_face {
            4 => ResultCode::ResCout,
            5 => ResultCode::ResSimple,
            _ => ResultCode::ResCritique,
        }
    }
}

/// Highest action tier a total would beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyTier {
    Rate,
    Simple,
    Complexe,
    Difficile,
    Epique,
}

impl LegacyTier {
    pub fn from_total(total: i32) -> Self {
        match total {
            t if t >= 30 => LegacyTier::Epique,
            t if t >= 20 => LegacyTier::Difficile,
            t if t >= 14 => LegacyTier::Complexe,
            t if t >= 6 => LegacyTier::Simple,
            _ => LegacyTier::Rate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegacyTier::Epique => "Epique",
            LegacyTier::Difficile => "Difficile",
            LegacyTier::Complexe => "Complexe",
            LegacyTier::Simple => "Simple",
            LegacyTier::Rate => "raté",
        }
    }

    /// Chat annotation for this tier.
    pub fn annotation(&self) -> String {
        match self {
            LegacyTier::Rate => format!("Jet {}.", self.label()),
            tier => format!("Jet réussi si action : {}.", tier.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyCritical {
    /// Every die rolled a one
    Failure,
    /// Every die rolled a six; grants the extra die
    Success,
}

impl LegacyCritical {
    pub fn label(&self) -> &'static str {
        match self {
            LegacyCritical::Failure => "Echec critique",
            LegacyCritical::Success => "Succès critique",
        }
    }
}

/// Legacy critical trigger for a pool of `dice_count` dice, after the
/// health penalty. Never fires for an empty pool.
pub fn legacy_critical(dice_sum: i32, dice_count: usize) -> Option<LegacyCritical> {
    let dice_count = i32::try_from(dice_count).unwrap_or(i32::MAX);
    if dice_count == 0 {
        None
    } else if dice_sum == dice_count {
        Some(LegacyCritical::Failure)
    } else if dice_sum == dice_count.saturating_mul(i32::from(super::dice::DIE_FACES)) {
        Some(LegacyCritical::Success)
    } else {
        None
    }
}

/// Result code of a legacy roll.
pub fn classify_legacy(
    dice_count: usize,
    total: i32,
    critical: Option<LegacyCritical>,
) -> ResultCode {
    if dice_count == 0 {
        return ResultCode::EchecCritique;
    }
    match critical {
        Some(LegacyCritical::Failure) => ResultCode::EchecCritique,
        Some(LegacyCritical::Success) => ResultCode::ResCritique,
        None if LegacyTier::from_total(total) >= LegacyTier::Simple => ResultCode::ResSimple,
        None => ResultCode::EchecSimple,
    }
}
