//! Campaign decomposition
//!
//! A campaign string such as `myapp://test1_push_test2_..._test11` is split
//! on the delimiter into positional fields. The first token is `sub1`, the
//! second token is always the `push` slot, and token N (N >= 3) is `sub(N-1)`.

use tl_core::{BuilderConfig, ParamSet, ParamValue};
use tracing::debug;

/// Campaign input selected from a parameter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignInput {
    /// Supplied as null, or every fallback was null
    Null,
    /// Raw campaign string as supplied
    Raw(String),
}

impl CampaignInput {
    /// Value written under the campaign key, before encoding
    pub fn render<'a>(&'a self, config: &'a BuilderConfig) -> &'a str {
        match self {
            Self::Null => &config.null_literal,
            Self::Raw(raw) => raw,
        }
    }

    pub fn decompose(&self, config: &BuilderConfig) -> CampaignFields {
        match self {
            Self::Null => CampaignFields::default(),
            Self::Raw(raw) => CampaignFields::parse(raw, config),
        }
    }
}

impl From<ParamValue> for CampaignInput {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Null => Self::Null,
            ParamValue::Present(raw) => Self::Raw(raw),
        }
    }
}

/// Remove the campaign keys from `params` and return the selected campaign.
///
/// Fallback keys win over the plain campaign key: the first non-blank one is
/// used, otherwise the last present fallback is taken as given. A plain
/// campaign value is always taken as given.
/// Returns `None` when no campaign key was supplied at all.
pub fn take_campaign(params: &mut ParamSet, config: &BuilderConfig) -> Option<CampaignInput> {
    let direct = params.remove(&config.campaign_key);
    let mut fallbacks: Vec<ParamValue> = config
        .campaign_fallback_keys
        .iter()
        .filter_map(|key| params.remove(key))
        .collect();

    let selected = match fallbacks
        .iter()
        .position(|value| value.as_deref().is_some_and(|v| !config.is_blank(v)))
    {
        Some(index) => fallbacks.swap_remove(index),
        None => fallbacks.pop().or(direct)?,
    };

    let input = CampaignInput::from(selected);
    debug!(campaign = ?input, "Selected campaign");
    Some(input)
}

/// Positional fields extracted from a campaign string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFields {
    /// Second token, whatever its value
    pub push: Option<String>,
    /// Tokens for sub1, sub2, ... in order
    pub subs: Vec<String>,
}

impl CampaignFields {
    pub fn parse(raw: &str, config: &BuilderConfig) -> Self {
        let body = config.strip_deep_link(raw);
        let mut tokens: Vec<&str> = body.split(config.delimiter).collect();
        if tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }

        let push = (tokens.len() > 1).then(|| tokens.remove(1).to_string());

        if tokens.len() > config.sub_field_count {
            debug!(
                dropped = tokens.len() - config.sub_field_count,
                "Dropping campaign tokens past the last sub field"
            );
            tokens.truncate(config.sub_field_count);
        }

        Self {
            push,
            subs: tokens.into_iter().map(str::to_string).collect(),
        }
    }

    /// Whether the push slot carries the push marker
    pub fn is_push(&self, config: &BuilderConfig) -> bool {
        self.push.as_deref() == Some(config.push_marker.as_str())
    }

    /// Get the token for a 1-based sub field slot
    pub fn sub(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|i| self.subs.get(i))
            .map(String::as_str)
    }

    /// Render the `push` and `subN` fields, unencoded.
    ///
    /// Missing slots are padded: push and sub1 get the null literal,
    /// sub2..sub9 an empty value, sub10 the first-open value, later slots
    /// are omitted.
    pub fn fields(&self, config: &BuilderConfig) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(config.sub_field_count + 1);
        let push = self.push.as_ref().unwrap_or(&config.null_literal);
        fields.push(("push".to_string(), push.clone()));

        for slot in 1..=config.sub_field_count {
            let value = match (self.sub(slot), slot) {
                (Some(token), _) => token.to_string(),
                (None, 1) => config.null_literal.clone(),
                (None, 10) => config.first_open_value.clone(),
                (None, s) if s < 10 => String::new(),
                (None, _) => continue,
            };
            fields.push((format!("sub{}", slot), value));
        }
        fields
    }
}
