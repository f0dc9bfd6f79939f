//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod roll;
pub mod sheet;

pub use roll::{PreparedRoll, RollResult, RollSkill, RollSkillError, RollUseCases};
pub use sheet::{ActorSheet, SheetError, SheetView};
