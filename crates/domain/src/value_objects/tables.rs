//! Static reference tables supplied at startup
//!
//! Races, difficulties, bonus/malus choices and narrative results. The
//! tables are immutable once built; hosts may load their own copies, the
//! built-in set mirrors the stock game data.

use serde::{Deserialize, Serialize};

use crate::error::RollError;

/// Playable race. Some races widen or narrow the "seriously" health band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub code: String,
    pub name: String,
    #[serde(default, rename = "seriously", skip_serializing_if = "Option::is_none")]
    pub seriously_capacity: Option<i32>,
}

/// Difficulty choice: `value` is the number of success faces required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub code: String,
    pub name: String,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusMalus {
    pub code: String,
    pub name: String,
    pub value: i32,
}

/// Narrative result: one entry per classifier result code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    pub races: Vec<Race>,
    pub difficulties: Vec<Difficulty>,
    pub bonus_malus: Vec<BonusMalus>,
    pub results: Vec<ResultEntry>,
}

impl ReferenceTables {
    pub fn builtin() -> Self {
        Self {
            races: builtin_races(),
            difficulties: builtin_difficulties(),
            bonus_malus: builtin_bonus_malus(),
            results: builtin_results(),
        }
    }

    pub fn race(&self, code: &str) -> Option<&Race> {
        self.races.iter().find(|race| race.code == code)
    }

    pub fn difficulty(&self, code: &str) -> Result<&Difficulty, RollError> {
        self.difficulties
            .iter()
            .find(|d| d.code == code)
            .ok_or_else(|| RollError::MissingDifficultyValue(code.to_string()))
    }

    pub fn bonus_malus(&self, code: &str) -> Result<&BonusMalus, RollError> {
        self.bonus_malus
            .iter()
            .find(|b| b.code == code)
            .ok_or_else(|| RollError::MissingBonusMalusValue(code.to_string()))
    }

    pub fn result(&self, code: &str) -> Result<&ResultEntry, RollError> {
        self.results
            .iter()
            .find(|r| r.code == code)
            .ok_or_else(|| RollError::UnknownResultCode(code.to_string()))
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Default difficulty code when the caller does not pick one.
pub const DEFAULT_DIFFICULTY: &str = "SIMPLE";
/// Neutral bonus/malus code.
pub const NEUTRAL_BONUS_MALUS: &str = "0";

pub fn builtin_races() -> Vec<Race> {
    [
        ("HUMAIN", "Humain", None),
        ("ELFE", "Elfe", Some(1)),
        ("NAIN", "Nain", Some(3)),
        ("HALFELIN", "Halfelin", None),
        ("FEE", "Fée", Some(1)),
        ("ORC", "Orc", Some(3)),
    ]
    .into_iter()
    .map(|(code, name, seriously_capacity)| Race {
        code: code.to_string(),
        name: name.to_string(),
        seriously_capacity,
    })
    .collect()
}

pub fn builtin_difficulties() -> Vec<Difficulty> {
    [
        ("TRIVIALE", "Triviale", 1),
        ("SIMPLE", "Simple", 2),
        ("COMPLEXE", "Complexe", 3),
        ("DIFFICILE", "Difficile", 4),
        ("EPIQUE", "Épique", 5),
    ]
    .into_iter()
    .map(|(code, name, value)| Difficulty {
        code: code.to_string(),
        name: name.to_string(),
        value,
    })
    .collect()
}

pub fn builtin_bonus_malus() -> Vec<BonusMalus> {
    [
        ("-4", "Grand malus", -4),
        ("-2", "Malus", -2),
        ("0", "Aucun", 0),
        ("+2", "Bonus", 2),
        ("+4", "Grand bonus", 4),
    ]
    .into_iter()
    .map(|(code, name, value)| BonusMalus {
        code: code.to_string(),
        name: name.to_string(),
        value,
    })
    .collect()
}

pub fn builtin_results() -> Vec<ResultEntry> {
    [
        (
            "RES_CRITIQUE",
            "Réussite critique",
            "L'action est réussie de manière exceptionnelle, obtenant un résultat au-delà des attentes.",
        ),
        (
            "RES_SIMPLE",
            "Réussite simple",
            "L'action est réussie sans complication ni coût supplémentaire.",
        ),
        (
            "RES_COUT",
            "Réussite à coût",
            "L'action est réussie, mais avec des complications mineures ou des coûts supplémentaires.",
        ),
        (
            "ECHEC_SIMPLE",
            "Échec simple",
            "L'action échoue, mais sans conséquence.",
        ),
        (
            "ECHEC_CONSEQ",
            "Échec à conséquence",
            "L'action échoue, mais avec des conséquences mineures.",
        ),
        (
            "ECHEC_CRITIQUE",
            "Échec critique",
            "L'action est un échec total, avec des conséquences graves.",
        ),
    ]
    .into_iter()
    .map(|(code, name, description)| ResultEntry {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
