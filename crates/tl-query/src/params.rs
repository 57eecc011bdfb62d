//! Reading and replacing parameters in an existing query string
//!
//! Keys are matched exactly on `&`/`?` boundaries, so `sub1` never matches
//! `sub10`. Values are returned as they appear in the query (still encoded).

use tl_core::{TlError, TlResult};
use tracing::warn;

use crate::encoding::{decode, encode, encode_pair};

/// A query string split at its first `?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParts<'a> {
    /// Everything before the `?`
    pub base: &'a str,
    /// Everything after the `?`
    pub query: &'a str,
}

impl<'a> QueryParts<'a> {
    pub fn split(full: &'a str) -> TlResult<Self> {
        full.split_once('?')
            .map(|(base, query)| Self { base, query })
            .ok_or_else(|| TlError::malformed(full))
    }

    /// `key=value` pairs in order; segments without `=` are skipped
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.query
            .split('&')
            .filter_map(|segment| segment.split_once('='))
    }

    /// Raw value of the last pair named `name`
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs()
            .filter(|(key, _)| key_matches(key, name))
            .last()
            .map(|(_, value)| value)
    }
}

/// Whether a key as written in a query names `name`, encoded or not
fn key_matches(key: &str, name: &str) -> bool {
    key == name || (key.contains('%') && decode(key) == name)
}

/// Get the raw value of `name`, or an error if the query has no `?` or no such parameter
pub fn try_get_param_value<'a>(query: &'a str, name: &str) -> TlResult<&'a str> {
    QueryParts::split(query)?
        .get(name)
        .ok_or_else(|| TlError::not_found(name))
}

/// Get the raw value of `name`; empty string when not found.
///
/// When `name` appears more than once the last value wins.
pub fn get_param_value(query: &str, name: &str) -> String {
    try_get_param_value(query, name)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Get the percent-decoded value of `name`
pub fn get_decoded_param_value(query: &str, name: &str) -> TlResult<String> {
    try_get_param_value(query, name).map(decode)
}

/// Replace the value of every `name` pair with the encoded `value`.
///
/// A missing parameter is appended at the end of the query.
pub fn try_replace_param_value(query: &str, name: &str, value: &str) -> TlResult<String> {
    let parts = QueryParts::split(query)?;
    let encoded = encode(value);

    let mut found = false;
    let mut segments: Vec<String> = Vec::new();
    for segment in parts.query.split('&') {
        match segment.split_once('=') {
            Some((key, _)) if key_matches(key, name) => {
                found = true;
                segments.push(format!("{}={}", key, encoded));
            }
            _ => segments.push(segment.to_string()),
        }
    }

    let mut rebuilt = segments.join("&");
    if !found {
        if !rebuilt.is_empty() && !rebuilt.ends_with('&') {
            rebuilt.push('&');
        }
        rebuilt.push_str(&encode_pair(name, value));
    }

    Ok(format!("{}?{}", parts.base, rebuilt))
}

/// Replace the value of `name`; a query without `?` is returned unchanged
pub fn replace_param_value(query: &str, name: &str, value: &str) -> String {
    try_replace_param_value(query, name, value).unwrap_or_else(|e| {
        warn!(error = %e, param = name, "Leaving query unchanged");
        query.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_query;

    const QUERY: &str = "https://www.google.com?bundle=com.a.b&push=test&sub1=tt&notId=null";

    #[test]
    fn test_get_value() {
        let data = "https://www.google.com?bundle=com.a.b&push=test&sub1=tt";
        assert_eq!(get_param_value(data, "push"), "test");
        assert_eq!(get_param_value(data, "bundle"), "com.a.b");
        assert_eq!(get_param_value(data, "sub1"), "tt");
    }

    #[test]
    fn test_get_exact_key_boundaries() {
        let data = "https://x?sub10=firstOpen&sub1=a&xsub1=b";
        assert_eq!(get_param_value(data, "sub1"), "a");
        assert_eq!(get_param_value(data, "sub10"), "firstOpen");
        assert_eq!(get_param_value(data, "sub"), "");

        let data = "https://x?sub10=firstOpen";
        assert_eq!(get_param_value(data, "sub1"), "");
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(get_param_value(QUERY, "campaign"), "");
        assert_eq!(get_param_value("https://x/no-query", "push"), "");

        let err = try_get_param_value(QUERY, "campaign").unwrap_err();
        assert!(matches!(err, TlError::ParamNotFound { .. }));
        let err = try_get_param_value("https://x", "push").unwrap_err();
        assert!(matches!(err, TlError::MalformedQuery { .. }));
    }

    #[test]
    fn test_get_last_duplicate_wins() {
        let data = "https://x?push=first&sub1=a&push=second";
        assert_eq!(get_param_value(data, "push"), "second");
    }

    #[test]
    fn test_get_empty_value() {
        assert_eq!(try_get_param_value("d?sub4=&sub5=", "sub4").unwrap(), "");
    }

    #[test]
    fn test_get_decoded() {
        let data = "d?campaign=myapp%3A%2F%2Fa_b&campaign_id=CAMPAIGN_ID%201";
        assert_eq!(get_param_value(data, "campaign_id"), "CAMPAIGN_ID%201");
        assert_eq!(get_decoded_param_value(data, "campaign_id").unwrap(), "CAMPAIGN_ID 1");
        assert_eq!(get_decoded_param_value(data, "campaign").unwrap(), "myapp://a_b");
    }

    #[test]
    fn test_replace_value() {
        let result = replace_param_value(QUERY, "notId", "a123b");

        assert!(result.contains("notId=a123b"));
        assert!(!result.contains("notId=null"));
        assert_eq!(
            result,
            "https://www.google.com?bundle=com.a.b&push=test&sub1=tt&notId=a123b"
        );
    }

    #[test]
    fn test_replace_exact_key_boundaries() {
        let data = "https://x?sub1=a&sub10=firstOpen";
        assert_eq!(
            replace_param_value(data, "sub1", "b"),
            "https://x?sub1=b&sub10=firstOpen"
        );
    }

    #[test]
    fn test_replace_encodes_value() {
        let result = replace_param_value(QUERY, "push", "a b&c");
        assert_eq!(get_param_value(&result, "push"), "a%20b%26c");
        assert_eq!(get_param_value(&result, "sub1"), "tt");
    }

    #[test]
    fn test_replace_missing_appends() {
        let result = replace_param_value(QUERY, "sub2", "x");
        assert_eq!(result, format!("{}&sub2=x", QUERY));

        assert_eq!(replace_param_value("https://x?", "notId", "1"), "https://x?notId=1");
    }

    #[test]
    fn test_encoded_key_round_trip() {
        let built = build_query("https://x?", [("utm source", "mail")]);
        assert!(built.contains("utm%20source=mail"));
        assert_eq!(get_param_value(&built, "utm source"), "mail");

        let replaced = replace_param_value(&built, "utm source", "web");
        assert_eq!(replaced, built.replace("utm%20source=mail", "utm%20source=web"));
        assert_eq!(replaced.matches("utm%20source=").count(), 1);
        assert_eq!(get_param_value(&replaced, "utm source"), "web");
    }

    #[test]
    fn test_replace_without_separator_unchanged() {
        assert_eq!(replace_param_value("https://x", "notId", "1"), "https://x");
        assert!(try_replace_param_value("https://x", "notId", "1").is_err());
    }
}
