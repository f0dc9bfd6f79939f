//! Actor entity - characters and creatures that can roll
//!
//! Health bands, penalties and every other derived value are recomputed
//! from the raw snapshot on each access; nothing derived is stored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemKind, ItemVariant};
use crate::value_objects::{
    compute_health_bands, AttributeKey, Attributes, Health, HealthBands, HealthLayout,
    HealthModel, ReferenceTables,
};
use crate::{ActorId, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    #[default]
    Character,
    Creature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ActorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Race code, see [`ReferenceTables::races`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, rename = "caracts")]
    pub attributes: Attributes,
    #[serde(default)]
    pub health: Health,
    #[serde(default, rename = "healthModel", skip_serializing_if = "HealthModel::is_standard")]
    pub health_model: HealthModel,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Attack and defence granted by equipped gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub attack: i32,
    pub defence: i32,
}

/// Owned items split the way the sheet lists them, each list sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemGroups {
    /// Keyed by equipment type code
    pub equipment: BTreeMap<String, Vec<Item>>,
    pub consumables: Vec<Item>,
    pub skills: Vec<Item>,
    pub evolution_powers: Vec<Item>,
    pub powers: Vec<Item>,
    pub crystals: Vec<Item>,
}

/// Sheet values computed from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedActor {
    pub health: HealthBands,
    pub max_health: i32,
    pub health_penalty: i32,
    /// Attributes with `realvalue` filled in
    pub attributes: Attributes,
    pub initiative: i32,
    pub equipment: EquipmentBonuses,
}

impl Actor {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            img: None,
            race: None,
            attributes: Attributes::new(),
            health: Health::default(),
            health_model: HealthModel::default(),
            items: Vec::new(),
        }
    }

    // Builder methods

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn with_attribute(mut self, key: AttributeKey, value: i32) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_health(mut self, value: i32, max: i32) -> Self {
        self.health = Health::new(value, max);
        self
    }

    pub fn with_health_model(mut self, model: HealthModel) -> Self {
        self.health_model = model;
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    // Derived values

    pub fn health_layout(&self, tables: &ReferenceTables) -> HealthLayout {
        if self.health_model == HealthModel::Proportional {
            return HealthLayout::proportional();
        }
        let race = match self.kind {
            ActorKind::Character => self.race.as_deref().and_then(|code| tables.race(code)),
            ActorKind::Creature => None,
        };
        HealthLayout::standard(race, self.attributes.value(AttributeKey::Vig))
    }

    /// Maximum health: the sum of band capacities when the layout is fixed,
    /// otherwise the stored maximum.
    pub fn max_health(&self, tables: &ReferenceTables) -> i32 {
        self.health_layout(tables)
            .fixed_total()
            .unwrap_or(self.health.max)
    }

    pub fn health_bands(&self, tables: &ReferenceTables) -> HealthBands {
        let layout = self.health_layout(tables);
        let max = layout.fixed_total().unwrap_or(self.health.max);
        compute_health_bands(self.health.value, max, &layout)
    }

    pub fn health_penalty(&self, tables: &ReferenceTables) -> i32 {
        self.health_bands(tables).penalty()
    }

    pub fn initiative(&self) -> i32 {
        self.attributes.value(AttributeKey::Hab) + self.attributes.value(AttributeKey::Int)
    }

    pub fn equipment_bonuses(&self) -> EquipmentBonuses {
        self.items
            .iter()
            .filter_map(|item| match &item.kind {
                ItemKind::Equipment {
                    equipped: true,
                    attack,
                    defence,
                    ..
                } => Some((*attack, *defence)),
                _ => None,
            })
            .fold(EquipmentBonuses::default(), |acc, (attack, defence)| {
                EquipmentBonuses {
                    attack: acc.attack + attack,
                    defence: acc.defence + defence,
                }
            })
    }

    pub fn derived(&self, tables: &ReferenceTables) -> DerivedActor {
        let layout = self.health_layout(tables);
        let max_health = layout.fixed_total().unwrap_or(self.health.max);
        let health = compute_health_bands(self.health.value, max_health, &layout);
        let health_penalty = health.penalty();
        DerivedActor {
            attributes: self.attributes.with_health_penalty(health_penalty),
            health,
            max_health,
            health_penalty,
            initiative: self.initiative(),
            equipment: self.equipment_bonuses(),
        }
    }

    /// Owned item with this id, only if it is of the given variant.
    pub fn find_item(&self, id: ItemId, variant: ItemVariant) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id && item.variant() == variant)
    }

    pub fn grouped_items(&self) -> ItemGroups {
        let mut groups = ItemGroups::default();
        for item in &self.items {
            let bucket = match &item.kind {
                ItemKind::Equipment { equipment_type, .. } => {
                    groups.equipment.entry(equipment_type.clone()).or_default()
                }
                ItemKind::Consumable { .. } => &mut groups.consumables,
                ItemKind::Skill { .. } => &mut groups.skills,
                ItemKind::Power { .. } if item.is_evolution_power() => &mut groups.evolution_powers,
                ItemKind::Power { .. } => &mut groups.powers,
                ItemKind::Crystal { .. } => &mut groups.crystals,
            };
            bucket.push(item.clone());
        }

        let by_name = |a: &Item, b: &Item| a.name.cmp(&b.name);
        for list in groups.equipment.values_mut() {
            list.sort_by(by_name);
        }
        groups.consumables.sort_by(by_name);
        groups.skills.sort_by(by_name);
        groups.evolution_powers.sort_by(by_name);
        groups.powers.sort_by(by_name);
        groups.crystals.sort_by(by_name);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{HealthBand, HealthIndicator};

    fn tables() -> ReferenceTables {
        ReferenceTables::builtin()
    }

    #[test]
    fn race_and_vigor_shape_max_health() {
        let human = Actor::new("Aldric", ActorKind::Character)
            .with_race("HUMAIN")
            .with_attribute(AttributeKey::Vig, 3);
        assert_eq!(human.max_health(&tables()), 8);

        let dwarf = Actor::new("Brunhild", ActorKind::Character)
            .with_race("NAIN")
            .with_attribute(AttributeKey::Vig, 5);
        assert_eq!(dwarf.max_health(&tables()), 10);

        // Creatures ignore race
        let beast = Actor::new("Loup", ActorKind::Creature)
            .with_race("NAIN")
            .with_attribute(AttributeKey::Vig, 3);
        assert_eq!(beast.max_health(&tables()), 8);
    }

    #[test]
    fn proportional_model_splits_the_stored_maximum() {
        let actor = Actor::new("Spectre", ActorKind::Creature)
            .with_health(3, 5)
            .with_health_model(HealthModel::Proportional);

        assert_eq!(actor.max_health(&tables()), 5);
        let bands = actor.health_bands(&tables());
        let levels: Vec<_> = bands.levels.iter().map(|l| (l.band, l.value, l.max)).collect();
        assert_eq!(
            levels,
            vec![
                (HealthBand::Underdeath, 1, 1),
                (HealthBand::Injured, 2, 3),
                (HealthBand::Safe, 0, 1),
            ]
        );
        assert_eq!(bands.indicator, HealthIndicator::Band(HealthBand::Injured));
        assert_eq!(actor.health_penalty(&tables()), -1);
    }

    #[test]
    fn health_model_is_read_from_snapshots() {
        let json = r#"{
            "id": "9e8d7c6b-5a49-4382-9172-6a5b4c3d2e1f",
            "name": "Loup gris",
            "type": "creature",
            "health": { "value": 5, "max": 5 },
            "healthModel": "proportional"
        }"#;
        let actor: Actor = serde_json::from_str(json).unwrap();
        assert_eq!(actor.health_model, HealthModel::Proportional);
        assert_eq!(actor.max_health(&tables()), 5);

        let standard = Actor::new("Aldric", ActorKind::Character);
        let value = serde_json::to_value(&standard).unwrap();
        assert!(value.get("healthModel").is_none());
    }

    #[test]
    fn derived_values_apply_the_health_penalty() {
        let actor = Actor::new("Mira", ActorKind::Character)
            .with_attribute(AttributeKey::Vig, 3)
            .with_attribute(AttributeKey::Hab, 2)
            .with_attribute(AttributeKey::Int, 4)
            .with_health(3, 8);

        let derived = actor.derived(&tables());
        assert_eq!(
            derived.health.indicator,
            HealthIndicator::Band(HealthBand::Seriously)
        );
        assert_eq!(derived.health_penalty, -2);
        assert_eq!(
            derived.attributes.get(AttributeKey::Int).unwrap().realvalue,
            Some(2)
        );
        assert_eq!(derived.initiative, 6);
        // The snapshot itself is never mutated
        assert_eq!(actor.attributes.get(AttributeKey::Int).unwrap().realvalue, None);
    }

    #[test]
    fn only_equipped_gear_counts_toward_bonuses() {
        let actor = Actor::new("Tarn", ActorKind::Character)
            .with_item(Item::equipment("Épée", "ARME", 2, 0).equipped())
            .with_item(Item::equipment("Bouclier", "ARMURE", 0, 2).equipped())
            .with_item(Item::equipment("Hache", "ARME", 3, 0));
        assert_eq!(
            actor.equipment_bonuses(),
            EquipmentBonuses {
                attack: 2,
                defence: 2
            }
        );
    }

    #[test]
    fn find_item_checks_the_variant() {
        let skill = Item::skill("Discrétion", 2);
        let id = skill.id;
        let actor = Actor::new("Sel", ActorKind::Character).with_item(skill);
        assert!(actor.find_item(id, ItemVariant::Skill).is_some());
        assert!(actor.find_item(id, ItemVariant::Crystal).is_none());
    }

    #[test]
    fn items_are_grouped_and_sorted() {
        let actor = Actor::new("Ysa", ActorKind::Character)
            .with_item(Item::power("Vol", "EVO", 1))
            .with_item(Item::power("Boule de feu", "ELEM", 2))
            .with_item(Item::power("Armure d'os", "EVO", 1))
            .with_item(Item::skill("Survie", 1))
            .with_item(Item::skill("Escalade", 2))
            .with_item(Item::equipment("Dague", "ARME", 1, 0));

        let groups = actor.grouped_items();
        let names = |items: &[Item]| items.iter().map(|i| i.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&groups.evolution_powers), vec!["Armure d'os", "Vol"]);
        assert_eq!(names(&groups.powers), vec!["Boule de feu"]);
        assert_eq!(names(&groups.skills), vec!["Escalade", "Survie"]);
        assert_eq!(groups.equipment["ARME"].len(), 1);
        assert!(groups.crystals.is_empty());
    }

    #[test]
    fn snapshot_json_uses_host_field_names() {
        let json = r#"{
            "id": "0b6c3f1e-9a51-4c43-8f0e-5d3b2a1c9e77",
            "name": "Korr",
            "type": "creature",
            "caracts": {"vig": {"name": "Vigueur", "value": 2}},
            "health": {"value": 4, "max": 8}
        }"#;
        let actor: Actor = serde_json::from_str(json).unwrap();
        assert_eq!(actor.kind, ActorKind::Creature);
        assert_eq!(actor.attributes.value(AttributeKey::Vig), 2);
        assert!(actor.items.is_empty());
    }
}
