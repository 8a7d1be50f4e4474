//! Client, device and network attributes captured by activity events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Field names in declaration order, as they appear in raw activity data.
pub const FINGERPRINT_FIELDS: [&str; 8] = [
    "os",
    "os_version",
    "browser",
    "browser_user_agent",
    "ip",
    "isp",
    "device",
    "distro",
];

/// Device and network fingerprint of an activity event.
///
/// Every field is independently optional. Use [`Fingerprint::make`] to build
/// one from raw export values, which often arrive wrapped in stray quotes.
///
/// # Examples
///
/// ```
/// use discord_data_core::Fingerprint;
/// use std::collections::HashMap;
///
/// let raw = HashMap::from([
///     ("os".to_string(), "\"Windows\"".to_string()),
///     ("browser".to_string(), "Discord Client".to_string()),
/// ]);
/// let fingerprint = Fingerprint::make(&raw);
///
/// assert_eq!(fingerprint.os().as_deref(), Some("Windows"));
/// assert_eq!(fingerprint.browser().as_deref(), Some("Discord Client"));
/// assert_eq!(*fingerprint.ip(), None);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
pub struct Fingerprint {
    /// Operating system name
    os: Option<String>,
    /// Operating system version
    os_version: Option<String>,
    /// Browser or client name
    browser: Option<String>,
    /// Full user agent string
    browser_user_agent: Option<String>,
    /// IP address the event came from
    ip: Option<String>,
    /// Internet service provider
    isp: Option<String>,
    /// Device model
    device: Option<String>,
    /// Linux distribution
    distro: Option<String>,
}

impl Fingerprint {
    /// Build a fingerprint from raw text fields keyed by field name.
    ///
    /// Leading and trailing `"` characters are stripped from each value.
    /// Missing keys become `None`; a value that is empty after stripping
    /// stays `Some("")`.
    pub fn make(blob: &HashMap<String, String>) -> Self {
        let fingerprint = Self::from_fields(|name| blob.get(name).map(|v| strip_quotes(v)));
        tracing::trace!(
            raw_fields = blob.len(),
            present = fingerprint.present_count(),
            "Built fingerprint from raw fields"
        );
        fingerprint
    }

    /// Build a fingerprint from a JSON object as found in activity exports.
    ///
    /// Text values are quote-stripped like [`Fingerprint::make`]. `null` is
    /// treated as missing; other scalars keep their JSON text.
    pub fn from_json(blob: &Map<String, Value>) -> Self {
        Self::from_fields(|name| match blob.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(strip_quotes(s)),
            Some(other) => Some(other.to_string()),
        })
    }

    /// Returns a builder for constructing a Fingerprint.
    pub fn builder() -> FingerprintBuilder {
        FingerprintBuilder::default()
    }

    /// True if no field is present.
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }

    fn from_fields(mut field: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            os: field("os"),
            os_version: field("os_version"),
            browser: field("browser"),
            browser_user_agent: field("browser_user_agent"),
            ip: field("ip"),
            isp: field("isp"),
            device: field("device"),
            distro: field("distro"),
        }
    }

    fn present_count(&self) -> usize {
        [
            &self.os,
            &self.os_version,
            &self.browser,
            &self.browser_user_agent,
            &self.ip,
            &self.isp,
            &self.device,
            &self.distro,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}

fn strip_quotes(raw: &str) -> String {
    raw.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_only_touches_ends() {
        assert_eq!(strip_quotes("\"v\""), "v");
        assert_eq!(strip_quotes("v"), "v");
        assert_eq!(strip_quotes("\"a \"b\" c\""), "a \"b\" c");
        assert_eq!(strip_quotes(" \"v\" "), " \"v\" ");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_field_list_matches_serialized_keys() {
        let value = serde_json::to_value(Fingerprint::default()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, FINGERPRINT_FIELDS);
    }
}
