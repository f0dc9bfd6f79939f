//! Entities - actors and the items they own

mod actor;
mod item;

pub use actor::{Actor, ActorKind, DerivedActor, EquipmentBonuses, ItemGroups};
pub use item::{Item, ItemKind, ItemVariant, EVOLUTION_POWER_TYPE};
