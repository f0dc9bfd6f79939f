//! Value objects - immutable pieces of actor state and reference data

mod attribute;
mod health;
mod tables;

pub use attribute::{Attribute, AttributeKey, Attributes};
pub use health::{
    compute_health_bands, BandCapacity, BandLevel, BandSpec, Health, HealthBand, HealthBands,
    HealthIndicator, HealthLayout, HealthModel,
};
pub use tables::{
    builtin_bonus_malus, builtin_difficulties, builtin_races, builtin_results, BonusMalus,
    Difficulty, Race, ReferenceTables, ResultEntry, DEFAULT_DIFFICULTY, NEUTRAL_BONUS_MALUS,
};
