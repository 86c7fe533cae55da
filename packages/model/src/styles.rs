use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single CSS property value as stored on an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    /// JSON `null`. Removes the key when merged.
    Unset,
}

impl StyleValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, StyleValue::Unset)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Unset => Ok(()),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

/// camelCase property name → value, sorted for deterministic output
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Visual overrides of an element: its own properties plus the `:hover` state.
///
/// Serialized as a single object with an optional nested `hover` object,
/// e.g. `{"color": "red", "hover": {"color": "blue"}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Styles {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hover: StyleMap,

    #[serde(flatten)]
    pub properties: StyleMap,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(property, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        Self {
            properties: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            hover: StyleMap::new(),
        }
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    pub fn with_hover(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.hover.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.hover.is_empty()
    }

    /// Apply a partial update on top of these styles
    pub fn merged(&self, patch: &Styles) -> Styles {
        merge_layers(&[self, patch])
    }
}

/// Merge three style layers in increasing precedence.
///
/// Keys are merged shallowly except `hover`, which is merged one level deeper.
/// Keys whose final value is [`StyleValue::Unset`] are dropped.
pub fn merge_styles(base: &Styles, existing: &Styles, overrides: &Styles) -> Styles {
    merge_layers(&[base, existing, overrides])
}

pub(crate) fn merge_layers(layers: &[&Styles]) -> Styles {
    let mut result = Styles::default();

    for layer in layers {
        for (key, value) in &layer.properties {
            result.properties.insert(key.clone(), value.clone());
        }
        for (key, value) in &layer.hover {
            result.hover.insert(key.clone(), value.clone());
        }
    }

    result.properties.retain(|_, v| !v.is_unset());
    result.hover.retain(|_, v| !v.is_unset());
    result
}

/// Merge any number of layers; used by the editor's effective-style view
pub fn merge_all<'a>(layers: impl IntoIterator<Item = &'a Styles>) -> Styles {
    let layers: Vec<&Styles> = layers.into_iter().collect();
    merge_layers(&layers)
}
