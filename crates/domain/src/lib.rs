//! Arlenor domain - actors, items, health bands and roll resolution.
//!
//! Everything here is a pure function of its inputs: no I/O, no logging and
//! no random source of its own.

pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use entities::{
    Actor, ActorKind, DerivedActor, EquipmentBonuses, Item, ItemGroups, ItemKind, ItemVariant,
    EVOLUTION_POWER_TYPE,
};
pub use error::{DomainError, RollError};
pub use ids::{ActorId, ItemId};
pub use rules::{
    classify_legacy, classify_success_count, legacy_critical, plan_roll, present,
    resolve_modifier, roll_pool, DicePool, LegacyCritical, LegacyTier, ModifierSource, PoolSize,
    ResolvedModifier, ResultCode, RollMessage, RollOutcome, RollPlan, RollRequest, RuleRevision,
    DIE_FACES, SUCCESS_FACE, UNTRAINED_PENALTY,
};
pub use value_objects::{
    compute_health_bands, Attribute, AttributeKey, Attributes, BandCapacity, BandLevel, BandSpec,
    BonusMalus, Difficulty, Health, HealthBand, HealthBands, HealthIndicator, HealthLayout,
    HealthModel, Race, ReferenceTables, ResultEntry, DEFAULT_DIFFICULTY, NEUTRAL_BONUS_MALUS,
};
