//! Payloads sent through the update channel.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Partial property update requested by a component: property name to new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropPatch(Map<String, Value>);

impl PropPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: &str, value: impl Into<Value>) -> Self {
        self.0.insert(prop.to_string(), value.into());
        self
    }
}
