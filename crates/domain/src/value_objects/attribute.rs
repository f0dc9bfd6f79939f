//! Attributes (`caracts`) - the five base values every actor rolls against

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Key of a base attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    /// Vigueur - physical strength and endurance
    Vig,
    /// Habileté - dexterity and precision
    Hab,
    /// Intellect
    Int,
    /// Charisme
    Cha,
    /// Pouvoir - affinity with powers and crystals
    Pou,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 5] = [
        AttributeKey::Vig,
        AttributeKey::Hab,
        AttributeKey::Int,
        AttributeKey::Cha,
        AttributeKey::Pou,
    ];

    /// Short code used in labels and data files (e.g. "vig").
    pub fn code(&self) -> &'static str {
        match self {
            AttributeKey::Vig => "vig",
            AttributeKey::Hab => "hab",
            AttributeKey::Int => "int",
            AttributeKey::Cha => "cha",
            AttributeKey::Pou => "pou",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            AttributeKey::Vig => "Vigueur",
            AttributeKey::Hab => "Habileté",
            AttributeKey::Int => "Intellect",
            AttributeKey::Cha => "Charisme",
            AttributeKey::Pou => "Pouvoir",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AttributeKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vig" | "vigueur" => Ok(Self::Vig),
            "hab" | "habilete" | "habileté" => Ok(Self::Hab),
            "int" | "intellect" => Ok(Self::Int),
            "cha" | "charisme" => Ok(Self::Cha),
            "pou" | "pouvoir" => Ok(Self::Pou),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// A single attribute value on an actor sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Nominal value, typically 0-5
    pub value: i32,
    /// Value after the health penalty, filled in by derived data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realvalue: Option<i32>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            realvalue: None,
        }
    }
}

/// The full attribute set of an actor.
///
/// Always holds all five keys; missing keys in a snapshot default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<AttributeKey, Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self(
            AttributeKey::ALL
                .iter()
                .map(|key| (*key, Attribute::new(key.default_name(), 0)))
                .collect(),
        )
    }

    pub fn with_value(mut self, key: AttributeKey, value: i32) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: AttributeKey, value: i32) {
        self.0
            .entry(key)
            .or_insert_with(|| Attribute::new(key.default_name(), 0))
            .value = value;
    }

    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.0.get(&key)
    }

    /// Nominal value of an attribute (0 when absent).
    pub fn value(&self, key: AttributeKey) -> i32 {
        self.0.get(&key).map(|a| a.value).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &Attribute)> {
        self.0.iter()
    }

    /// Copy with every `realvalue` set to `value + health_penalty`.
    pub fn with_health_penalty(&self, health_penalty: i32) -> Self {
        let mut derived = self.clone();
        for attribute in derived.0.values_mut() {
            attribute.realvalue = Some(attribute.value + health_penalty);
        }
        derived
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stored = BTreeMap::<AttributeKey, Attribute>::deserialize(deserializer)?;
        let mut attributes = Attributes::new();
        attributes.0.extend(stored);
        Ok(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_keys_parse_codes_and_names() {
        assert_eq!("vig".parse::<AttributeKey>().unwrap(), AttributeKey::Vig);
        assert_eq!("Habileté".parse::<AttributeKey>().unwrap(), AttributeKey::Hab);
        assert_eq!(" POU ".parse::<AttributeKey>().unwrap(), AttributeKey::Pou);
        assert!(matches!(
            "luck".parse::<AttributeKey>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn new_attribute_set_holds_every_key_at_zero() {
        let attributes = Attributes::new();
        for key in AttributeKey::ALL {
            assert_eq!(attributes.value(key), 0);
            assert_eq!(attributes.get(key).unwrap().name, key.default_name());
        }
    }

    #[test]
    fn partial_snapshot_fills_missing_keys() {
        let json = r#"{"vig": {"name": "Vigueur", "value": 4}}"#;
        let attributes: Attributes = serde_json::from_str(json).unwrap();
        assert_eq!(attributes.value(AttributeKey::Vig), 4);
        assert_eq!(attributes.value(AttributeKey::Cha), 0);
        assert_eq!(attributes.iter().count(), 5);
    }

    #[test]
    fn health_penalty_fills_realvalue() {
        let attributes = Attributes::new()
            .with_value(AttributeKey::Vig, 3)
            .with_value(AttributeKey::Int, 1);
        let derived = attributes.with_health_penalty(-2);
        assert_eq!(derived.get(AttributeKey::Vig).unwrap().realvalue, Some(1));
        assert_eq!(derived.get(AttributeKey::Int).unwrap().realvalue, Some(-1));
        // Nominal values are untouched
        assert_eq!(derived.value(AttributeKey::Vig), 3);
    }
}
