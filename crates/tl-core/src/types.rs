//! Common types used throughout TrackLink RS

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single parameter value; `Null` is written as the null literal
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ParamValue {
    #[default]
    Null,
    Present(String),
}

impl ParamValue {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Present(s) => Some(s),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Value as written into a query, before encoding
    pub fn render<'a>(&'a self, null_literal: &'a str) -> &'a str {
        self.as_deref().unwrap_or(null_literal)
    }
}

impl From<Option<String>> for ParamValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Present)
    }
}

impl From<ParamValue> for Option<String> {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Null => None,
            ParamValue::Present(s) => Some(s),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Present(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Present(value.to_string())
    }
}

impl From<Option<&str>> for ParamValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Caller supplied parameters, kept sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn insert_null(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), ParamValue::Null);
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl<K, V> Extend<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for ParamSet {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl From<HashMap<String, String>> for ParamSet {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for ParamSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ParamSet {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}
