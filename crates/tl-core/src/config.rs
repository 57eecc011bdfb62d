//! Configuration types and loading
//!
//! Holds the knobs of campaign decomposition and query assembly. Hosts that
//! embed the builder can ship the configuration as JSON.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DEFAULT_CONFIG: LazyLock<BuilderConfig> = LazyLock::new(BuilderConfig::default);

/// Query builder configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Key that carries the campaign string in the output
    pub campaign_key: String,
    /// Keys checked in order for a campaign value; never emitted
    pub campaign_fallback_keys: Vec<String>,
    /// Deep link scheme stripped from the campaign before splitting
    pub deep_link_prefix: Option<String>,
    /// Separator between campaign tokens
    pub delimiter: char,
    /// Second-token marker for push-channel campaigns
    pub push_marker: String,
    /// Number of positional sub fields (sub1..subN)
    pub sub_field_count: usize,
    /// Fixed value of sub10
    pub first_open_value: String,
    /// Literal written for null values
    pub null_literal: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            campaign_key: "campaign".to_string(),
            campaign_fallback_keys: vec!["campaign_1".to_string(), "campaign_2".to_string()],
            deep_link_prefix: Some("myapp://".to_string()),
            delimiter: '_',
            push_marker: "push".to_string(),
            sub_field_count: 11,
            first_open_value: "firstOpen".to_string(),
            null_literal: "null".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(key: &str, message: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

impl BuilderConfig {
    /// Shared default configuration
    pub fn shared() -> &'static BuilderConfig {
        &DEFAULT_CONFIG
    }

    /// Load configuration from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            campaign_key = %config.campaign_key,
            sub_field_count = config.sub_field_count,
            "Loaded builder config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.campaign_key.is_empty() {
            return Err(ConfigError::invalid("campaign_key", "must not be empty"));
        }
        if self.push_marker.is_empty() {
            return Err(ConfigError::invalid("push_marker", "must not be empty"));
        }
        if self.push_marker.contains(self.delimiter) {
            return Err(ConfigError::invalid(
                "push_marker",
                "must not contain the delimiter",
            ));
        }
        // sub10 is the fixed first-open slot
        if self.sub_field_count < 10 {
            return Err(ConfigError::invalid("sub_field_count", "must be at least 10"));
        }
        if self.null_literal.is_empty() {
            return Err(ConfigError::invalid("null_literal", "must not be empty"));
        }
        Ok(())
    }

    /// Whether a raw value counts as absent (empty, null literal or `None`)
    pub fn is_blank(&self, value: &str) -> bool {
        value.is_empty() || value == self.null_literal || value == "None"
    }

    /// Strip the deep link scheme, if configured and present
    pub fn strip_deep_link<'a>(&self, campaign: &'a str) -> &'a str {
        match &self.deep_link_prefix {
            Some(prefix) if !prefix.is_empty() => {
                campaign.strip_prefix(prefix.as_str()).unwrap_or(campaign)
            }
            _ => campaign,
        }
    }
}
