//! Item entity - things an actor owns: gear, consumables, skills, powers, crystals
//!
//! Each variant carries only its own fields. Skills, powers and crystals
//! expose a `level` that rolls use as a modifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Power type code for evolution powers, listed apart on the sheet.
pub const EVOLUTION_POWER_TYPE: &str = "EVO";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Equipment {
        /// Taxonomy code, e.g. "ARME" or "ARMURE"
        #[serde(default)]
        equipment_type: String,
        #[serde(default)]
        equipped: bool,
        #[serde(default)]
        attack: i32,
        #[serde(default)]
        defence: i32,
    },
    Consumable {
        #[serde(default)]
        quantity: u32,
    },
    Skill {
        #[serde(default)]
        level: i32,
    },
    Power {
        #[serde(default)]
        power_type: String,
        #[serde(default)]
        level: i32,
    },
    Crystal {
        #[serde(default)]
        level: i32,
    },
}

/// Discriminant of [`ItemKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Equipment,
    Consumable,
    Skill,
    Power,
    Crystal,
}

impl fmt::Display for ItemVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemVariant::Equipment => "equipment",
            ItemVariant::Consumable => "consumable",
            ItemVariant::Skill => "skill",
            ItemVariant::Power => "power",
            ItemVariant::Crystal => "crystal",
        };
        f.write_str(name)
    }
}

impl ItemKind {
    pub fn variant(&self) -> ItemVariant {
        match self {
            ItemKind::Equipment { .. } => ItemVariant::Equipment,
            ItemKind::Consumable { .. } => ItemVariant::Consumable,
            ItemKind::Skill { .. } => ItemVariant::Skill,
            ItemKind::Power { .. } => ItemVariant::Power,
            ItemKind::Crystal { .. } => ItemVariant::Crystal,
        }
    }

    /// Level usable as a roll modifier, for the variants that have one.
    pub fn level(&self) -> Option<i32> {
        match self {
            ItemKind::Skill { level }
            | ItemKind::Power { level, .. }
            | ItemKind::Crystal { level } => Some(*level),
            ItemKind::Equipment { .. } | ItemKind::Consumable { .. } => None,
        }
    }
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            img: None,
            description: String::new(),
            kind,
        }
    }

    pub fn skill(name: impl Into<String>, level: i32) -> Self {
        Self::new(name, ItemKind::Skill { level })
    }

    pub fn power(name: impl Into<String>, power_type: impl Into<String>, level: i32) -> Self {
        Self::new(
            name,
            ItemKind::Power {
                power_type: power_type.into(),
                level,
            },
        )
    }

    pub fn crystal(name: impl Into<String>, level: i32) -> Self {
        Self::new(name, ItemKind::Crystal { level })
    }

    pub fn equipment(
        name: impl Into<String>,
        equipment_type: impl Into<String>,
        attack: i32,
        defence: i32,
    ) -> Self {
        Self::new(
            name,
            ItemKind::Equipment {
                equipment_type: equipment_type.into(),
                equipped: false,
                attack,
                defence,
            },
        )
    }

    pub fn consumable(name: impl Into<String>, quantity: u32) -> Self {
        Self::new(name, ItemKind::Consumable { quantity })
    }

    /// Marks equipment as equipped; no effect on other variants.
    pub fn equipped(mut self) -> Self {
        if let ItemKind::Equipment { equipped, .. } = &mut self.kind {
            *equipped = true;
        }
        self
    }

    pub fn variant(&self) -> ItemVariant {
        self.kind.variant()
    }

    pub fn is_evolution_power(&self) -> bool {
        matches!(
            &self.kind,
            ItemKind::Power { power_type, .. } if power_type == EVOLUTION_POWER_TYPE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_use_a_type_tag() {
        let json = r#"{
            "id": "6f1c5e58-2b8e-4f52-9d7a-3c1f0e2a9b10",
            "name": "Télékinésie",
            "type": "power",
            "power_type": "EVO",
            "level": 2
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.variant(), ItemVariant::Power);
        assert_eq!(item.kind.level(), Some(2));
        assert!(item.is_evolution_power());
        assert_eq!(item.description, "");
    }

    #[test]
    fn equipment_has_no_roll_level() {
        let sword = Item::equipment("Épée", "ARME", 2, 0).equipped();
        assert_eq!(sword.kind.level(), None);
        assert!(matches!(sword.kind, ItemKind::Equipment { equipped: true, .. }));

        let value = serde_json::to_value(&sword).unwrap();
        assert_eq!(value["type"], "equipment");
        assert_eq!(value["attack"], 2);
    }

    #[test]
    fn equipped_only_touches_equipment() {
        let potion = Item::consumable("Potion", 3).equipped();
        assert_eq!(potion.kind, ItemKind::Consumable { quantity: 3 });
    }
}
