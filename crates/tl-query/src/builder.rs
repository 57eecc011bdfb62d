//! Query Builder
//!
//! Provides a fluent API for assembling tracking link queries from a domain
//! and caller parameters, including campaign decomposition.

use tl_core::{BuilderConfig, ParamSet, ParamValue};
use tracing::{debug, trace};

use crate::campaign::take_campaign;
use crate::query::LinkQuery;

pub const NOT_ID_KEY: &str = "notId";
pub const FIRST_OPEN_KEY: &str = "sub10";

/// Builder for constructing link queries fluently
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    domain: String,
    params: ParamSet,
    config: BuilderConfig,
}

impl QueryBuilder {
    /// Create a builder for `domain`, which is used verbatim as the prefix
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            params: ParamSet::new(),
            config: BuilderConfig::shared().clone(),
        }
    }

    /// Use a custom configuration
    pub fn config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Add a parameter with a null value
    pub fn null_param(mut self, name: impl Into<String>) -> Self {
        self.params.insert_null(name);
        self
    }

    /// Add all parameters of a set
    pub fn params(mut self, params: impl IntoIterator<Item = (String, ParamValue)>) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the campaign string
    pub fn campaign(self, campaign: impl Into<ParamValue>) -> Self {
        let key = self.config.campaign_key.clone();
        self.param(key, campaign)
    }

    /// Set the notification id
    pub fn not_id(self, not_id: impl Into<ParamValue>) -> Self {
        self.param(NOT_ID_KEY, not_id)
    }

    /// Assemble the link query
    pub fn build(self) -> LinkQuery {
        let Self {
            domain,
            mut params,
            config,
        } = self;

        let campaign = take_campaign(&mut params, &config);
        let not_id = params.remove(NOT_ID_KEY).unwrap_or_default();

        let mut query = LinkQuery::new(domain);
        for (name, value) in params.iter() {
            trace!(param = name, "Pass-through parameter");
            query.set(name, value.render(&config.null_literal));
        }

        if let Some(campaign) = campaign {
            let fields = campaign.decompose(&config);
            debug!(push = ?fields.push, subs = fields.subs.len(), "Decomposed campaign");
            query.set(config.campaign_key.as_str(), campaign.render(&config));
            for (name, value) in fields.fields(&config) {
                query.set(name, value);
            }
        }

        query.set(NOT_ID_KEY, not_id.render(&config.null_literal));
        query.set(FIRST_OPEN_KEY, config.first_open_value.as_str());
        query
    }
}

/// Build a tracking link query with the default configuration.
///
/// `domain` is copied verbatim and should already end in `?`.
pub fn build_query(domain: &str, params: impl Into<ParamSet>) -> String {
    QueryBuilder::new(domain)
        .params(params.into())
        .build()
        .to_string()
}
