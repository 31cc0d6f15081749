//! Ordered style-property maps handed to the rendering layer.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::kebab::kebab_case;

/// A single style value: either text (`"100%"`) or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

/// Property name to value, in insertion order.
///
/// Every builder in this crate returns a fresh map, so callers are free to
/// mutate what they get back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a property, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Copy of `self` with every property laid on top of it.
    pub fn merged(&self, other: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            merged.insert(name, value.clone());
        }
        merged
    }

    /// Render as an inline `style` attribute, e.g.
    /// `position: relative; padding-top: 56.25%`.
    pub fn to_style_attribute(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {}", kebab_case(name), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FromIterator<(String, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().collect())
    }
}
