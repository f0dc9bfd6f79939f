//! Unified error types for the domain layer
//!
//! `DomainError` covers data-model problems (bad ids, unknown codes).
//! `RollError` is the roll resolution taxonomy: every variant is detected
//! before any die is rolled, except `UnknownResultCode` which signals a
//! mismatch between the classifier and the result table.

use thiserror::Error;

use crate::rules::ModifierSource;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format:
    ///
    /// ```ignore
    /// impl FromStr for AttributeKey {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "vig" => Ok(Self::Vig),
    ///             _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Failure while resolving a roll.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollError {
    /// The requested attribute, skill, power or crystal is not on the actor
    #[error("Modifier not found: {modifier}")]
    ModifierNotFound { modifier: ModifierSource },

    /// Difficulty code absent from the difficulty table
    #[error("Difficulty not found: '{0}'")]
    MissingDifficultyValue(String),

    /// Bonus/malus code absent from the bonus/malus table
    #[error("Bonus/malus not found: '{0}'")]
    MissingBonusMalusValue(String),

    /// The classifier produced a code the result table does not know
    #[error("Unknown result code: '{0}'")]
    UnknownResultCode(String),
}

impl RollError {
    pub fn modifier_not_found(modifier: ModifierSource) -> Self {
        Self::ModifierNotFound { modifier }
    }

    /// Whether the error should be shown to the player as a short notice.
    ///
    /// `UnknownResultCode` is a defect in the tables or the classifier and
    /// must not be presented as an ordinary warning.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::UnknownResultCode(_))
    }

    /// Short localized notice for the player.
    pub fn notice(&self) -> String {
        match self {
            Self::ModifierNotFound { modifier } => match modifier {
                ModifierSource::Attribute(_) => "Caractéristique non disponible".to_string(),
                ModifierSource::Skill(_) => "Compétence non disponible".to_string(),
                ModifierSource::Power(_) => "Pouvoir non disponible".to_string(),
                ModifierSource::Crystal(_) => "Cristal non disponible".to_string(),
            },
            Self::MissingDifficultyValue(code) => format!("Difficulté inconnue : {}", code),
            Self::MissingBonusMalusValue(code) => format!("Bonus/malus inconnu : {}", code),
            Self::UnknownResultCode(code) => format!("Résultat inconnu : {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemId;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn lookup_failures_are_user_facing() {
        let missing_power = RollError::modifier_not_found(ModifierSource::Power(ItemId::new()));
        assert!(missing_power.is_user_facing());
        assert_eq!(missing_power.notice(), "Pouvoir non disponible");

        let missing_difficulty = RollError::MissingDifficultyValue("EXTREME".into());
        assert!(missing_difficulty.is_user_facing());
        assert!(missing_difficulty.notice().contains("EXTREME"));
    }

    #[test]
    fn unknown_result_code_is_a_defect() {
        let err = RollError::UnknownResultCode("RES_BIZARRE".into());
        assert!(!err.is_user_facing());
        assert_eq!(err.to_string(), "Unknown result code: 'RES_BIZARRE'");
    }
}
