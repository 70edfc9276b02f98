//! Independently parsed document sections.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One optional top-level field of the profile document.
///
/// Each section is decoded on its own so that a malformed section does not
/// prevent its siblings from rendering. `null` counts as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Absent,
    Present(T),
    /// The field exists but does not match the expected shape.
    Malformed(String),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Section<T> {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the decoded value, if any.
    #[must_use]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    /// The decode error for a malformed section.
    #[must_use]
    pub fn malformed_reason(&self) -> Option<&str> {
        match self {
            Self::Malformed(reason) => Some(reason),
            Self::Absent | Self::Present(_) => None,
        }
    }
}

impl<T> From<T> for Section<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Section<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::Absent);
        }
        Ok(match T::deserialize(value) {
            Ok(decoded) => Self::Present(decoded),
            Err(err) => Self::Malformed(err.to_string()),
        })
    }
}

impl<T: Serialize> Serialize for Section<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent | Self::Malformed(_) => serializer.serialize_none(),
        }
    }
}
