//! Modifier resolution - the numeric contribution of an attribute, skill,
//! power or crystal to a roll

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{Actor, ItemVariant};
use crate::error::RollError;
use crate::value_objects::AttributeKey;
use crate::ItemId;

/// Effective value of an untrained skill or an unattuned crystal.
pub const UNTRAINED_PENALTY: i32 = -4;

/// Where a roll modifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "key")]
pub enum ModifierSource {
    Attribute(AttributeKey),
    Skill(ItemId),
    Power(ItemId),
    Crystal(ItemId),
}

impl ModifierSource {
    fn item(&self) -> Option<(ItemId, ItemVariant)> {
        match *self {
            ModifierSource::Attribute(_) => None,
            ModifierSource::Skill(id) => Some((id, ItemVariant::Skill)),
            ModifierSource::Power(id) => Some((id, ItemVariant::Power)),
            ModifierSource::Crystal(id) => Some((id, ItemVariant::Crystal)),
        }
    }

    /// Skills and crystals at level 0 count as untrained.
    fn substitutes_zero(&self) -> bool {
        matches!(self, ModifierSource::Skill(_) | ModifierSource::Crystal(_))
    }
}

impl fmt::Display for ModifierSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierSource::Attribute(key) => write!(f, "attribute {}", key),
            ModifierSource::Skill(id) => write!(f, "skill {}", id),
            ModifierSource::Power(id) => write!(f, "power {}", id),
            ModifierSource::Crystal(id) => write!(f, "crystal {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModifier {
    pub source: ModifierSource,
    /// Display name of the attribute or item
    pub label: String,
    pub value: i32,
}

/// Look up a modifier on the actor.
///
/// Items must be owned by the actor and be of the variant the source names;
/// anything else is [`RollError::ModifierNotFound`].
pub fn resolve_modifier(
    actor: &Actor,
    source: &ModifierSource,
) -> Result<ResolvedModifier, RollError> {
    let (label, value) = match source.item() {
        Some((id, variant)) => {
            let item = actor
                .find_item(id, variant)
                .ok_or_else(|| RollError::modifier_not_found(*source))?;
            let level = item
                .kind
                .level()
                .ok_or_else(|| RollError::modifier_not_found(*source))?;
            (item.name.clone(), level)
        }
        None => {
            let attribute = match source {
                ModifierSource::Attribute(key) => actor.attributes.get(*key),
                _ => None,
            }
            .ok_or_else(|| RollError::modifier_not_found(*source))?;
            (attribute.name.clone(), attribute.value)
        }
    };

    let value = if value == 0 && source.substitutes_zero() {
        UNTRAINED_PENALTY
    } else {
        value
    };

    Ok(ResolvedModifier {
        source: *source,
        label,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ActorKind, Item};

    fn actor_with(items: Vec<Item>) -> Actor {
        items.into_iter().fold(
            Actor::new("Lysandre", ActorKind::Character).with_attribute(AttributeKey::Cha, 0),
            |actor, item| actor.with_item(item),
        )
    }

    #[test]
    fn untrained_skill_counts_as_minus_four() {
        let skill = Item::skill("Persuasion", 0);
        let id = skill.id;
        let actor = actor_with(vec![skill]);

        let resolved = resolve_modifier(&actor, &ModifierSource::Skill(id)).unwrap();
        assert_eq!(resolved.value, UNTRAINED_PENALTY);
        assert_eq!(resolved.label, "Persuasion");
    }

    #[test]
    fn trained_skill_keeps_its_level() {
        let skill = Item::skill("Escrime", 5);
        let id = skill.id;
        let actor = actor_with(vec![skill]);
        assert_eq!(
            resolve_modifier(&actor, &ModifierSource::Skill(id)).unwrap().value,
            5
        );
    }

    #[test]
    fn zero_crystal_is_substituted_but_zero_power_is_not() {
        let crystal = Item::crystal("Cristal d'azur", 0);
        let power = Item::power("Lévitation", "EVO", 0);
        let (crystal_id, power_id) = (crystal.id, power.id);
        let actor = actor_with(vec![crystal, power]);

        assert_eq!(
            resolve_modifier(&actor, &ModifierSource::Crystal(crystal_id)).unwrap().value,
            -4
        );
        assert_eq!(
            resolve_modifier(&actor, &ModifierSource::Power(power_id)).unwrap().value,
            0
        );
    }

    #[test]
    fn zero_attribute_is_read_directly() {
        let actor = actor_with(vec![]);
        let resolved =
            resolve_modifier(&actor, &ModifierSource::Attribute(AttributeKey::Cha)).unwrap();
        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.label, "Charisme");
    }

    #[test]
    fn missing_or_mismatched_item_is_not_found() {
        let skill = Item::skill("Pistage", 2);
        let id = skill.id;
        let actor = actor_with(vec![skill]);

        let err = resolve_modifier(&actor, &ModifierSource::Power(id)).unwrap_err();
        assert_eq!(err, RollError::modifier_not_found(ModifierSource::Power(id)));

        let stranger = ItemId::new();
        assert!(matches!(
            resolve_modifier(&actor, &ModifierSource::Crystal(stranger)),
            Err(RollError::ModifierNotFound { .. })
        ));
    }
}
