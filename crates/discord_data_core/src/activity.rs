//! Account activity (telemetry) events.

use crate::{Fingerprint, RegionInfo, Timestamp};
use discord_data_error::{DiscordDataError, DiscordDataResult, ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A telemetry record of a user action such as a login.
///
/// # Examples
///
/// ```
/// use discord_data_core::{Activity, Timestamp};
///
/// let activity = Activity::builder()
///     .event_id("abc")
///     .event_type("login_successful")
///     .timestamp(Timestamp::parse("2021-01-01T00:00:00Z").unwrap())
///     .json_data_str(r#"{"client_send_timestamp":"1609459200000"}"#)
///     .build()
///     .unwrap();
///
/// let data = activity.json_data().unwrap();
/// assert_eq!(data["client_send_timestamp"], "1609459200000");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Activity {
    /// Export-assigned event identifier
    event_id: String,
    /// Event name, e.g. `login_successful`
    event_type: String,
    /// Geolocation, when the export has it
    #[builder(default, setter(into, strip_option))]
    region_info: Option<RegionInfo>,
    /// Client fingerprint; fields may all be absent
    #[builder(default)]
    fingerprint: Fingerprint,
    /// When the event happened, as exported
    timestamp: Timestamp,
    /// Remaining event payload as raw JSON text
    #[builder(default, setter(into, strip_option))]
    json_data_str: Option<String>,
}

impl Activity {
    /// Creates a new activity event from its exported fields.
    pub fn new(
        event_id: impl Into<String>,
        event_type: impl Into<String>,
        region_info: Option<RegionInfo>,
        fingerprint: Fingerprint,
        timestamp: Timestamp,
        json_data_str: Option<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_type: event_type.into(),
            region_info,
            fingerprint,
            timestamp,
            json_data_str,
        }
    }

    /// Returns a builder for constructing an Activity.
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::default()
    }

    /// Parse the embedded payload into a flat text-to-text mapping.
    ///
    /// Returns an empty map when there is no payload. The text is parsed on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the payload is not JSON, is not an object, or
    /// holds a value that is not text.
    pub fn json_data(&self) -> DiscordDataResult<HashMap<String, String>> {
        let Some(raw) = &self.json_data_str else {
            return Ok(HashMap::new());
        };
        parse_flat_object(raw).inspect_err(|e| {
            tracing::debug!(event_id = %self.event_id, error = %e, "Activity payload rejected");
        })
    }
}

#[track_caller]
fn parse_flat_object(raw: &str) -> DiscordDataResult<HashMap<String, String>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidJson(e.to_string())))?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            let found = json_type_name(&other).to_string();
            return Err(ParseError::new(ParseErrorKind::NotAnObject(found)).into());
        }
    };

    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            _ => Err(DiscordDataError::from(ParseError::new(
                ParseErrorKind::NonStringValue(key),
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
