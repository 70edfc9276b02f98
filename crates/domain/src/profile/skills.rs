//! Skills — free-text descriptions keyed by camel-case category.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One skill category with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    /// Camel-case identifier as written in the document (e.g. `programmingLanguages`).
    pub key: String,
    pub description: String,
}

/// Skill categories in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills(pub Vec<SkillCategory>);

impl Skills {
    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct SkillsVisitor;

impl<'de> Visitor<'de> for SkillsVisitor {
    type Value = Skills;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of skill category to description")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Skills, A::Error> {
        let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            let description = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            categories.push(SkillCategory { key, description });
        }
        Ok(Skills(categories))
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SkillsVisitor)
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.key, &category.description)?;
        }
        map.end()
    }
}
