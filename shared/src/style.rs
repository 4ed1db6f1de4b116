//! Inline style maps.
//!
//! The host runtime hands styles over as JSON objects with camelCase keys
//! (`backgroundColor`). Keys are normalized to CSS property names on insert so
//! that `backgroundColor` and `background-color` address the same entry.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Ordered CSS declarations. Later `set` calls replace earlier values in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::set`].
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = css_property_name(key);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = css_property_name(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Applies every entry of `overrides` on top of `self`.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (key, value) in &overrides.entries {
            self.set(key, value.clone());
        }
    }

    /// Consuming variant of [`StyleMap::merge`].
    pub fn merged(mut self, overrides: Option<&StyleMap>) -> Self {
        if let Some(overrides) = overrides {
            self.merge(overrides);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the map as the value of an inline `style` attribute.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Null entries are dropped; structured values have no CSS form and are
/// dropped with a warning.
impl From<Map<String, Value>> for StyleMap {
    fn from(map: Map<String, Value>) -> Self {
        let mut style = StyleMap::new();
        for (key, value) in map {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    log::warn!("ignoring style `{}`: {} is not a CSS value", key, value);
                    continue;
                }
            };
            style.set(&key, value);
        }
        style
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Converts a camelCase style key into its CSS property name.
///
/// A leading capital marks a vendor prefix (`WebkitTransform` becomes
/// `-webkit-transform`). Custom properties (`--name`) pass through unchanged.
pub fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
