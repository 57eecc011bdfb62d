//! Built link query
//!
//! A LinkQuery is the assembled set of fields for one tracking link,
//! rendered as `domain` followed by `&`-joined, percent-encoded pairs.

use std::collections::BTreeMap;
use std::fmt;

use crate::encoding::encode_pair;

/// Assembled link query, fields kept sorted by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkQuery {
    pub domain: String,
    /// Unencoded field values
    pub fields: BTreeMap<String, String>,
}

impl LinkQuery {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any earlier value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of `key=value` pairs in the rendered query
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Render the encoded query part, without the domain
    pub fn query_string(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| encode_pair(name, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for LinkQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.domain, self.query_string())
    }
}
