//! JSON output for export records.

use crate::finite::check_finite;
use discord_data_error::{DiscordDataResult, SerializationError};
use serde::{Deserialize, Serialize};

/// Output layout for [`serialize_with`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SerializeStyle {
    /// Single line, no extra whitespace
    #[default]
    Compact,
    /// Indented, one field per line
    Pretty,
}

/// Serialize a record, or any nesting of records, maps, sequences and
/// scalars, into compact JSON text.
///
/// Records become objects keyed by field name in declaration order, absent
/// optional fields become `null` and timestamps become ISO-8601 text.
///
/// # Errors
///
/// Returns a serialization error if the value has no JSON representation,
/// such as a map keyed by something other than text or numbers, or a NaN
/// or infinite float.
///
/// # Examples
///
/// ```
/// use discord_data_core::{serialize, Server};
///
/// let json = serialize(&Server::new(5, "Guild".to_string())).unwrap();
/// assert_eq!(json, r#"{"server_id":5,"name":"Guild"}"#);
/// ```
#[track_caller]
pub fn serialize<T>(value: &T) -> DiscordDataResult<String>
where
    T: Serialize + ?Sized,
{
    serialize_with(value, SerializeStyle::Compact)
}

/// Serialize into JSON text using the given layout.
///
/// # Errors
///
/// Same as [`serialize`].
#[track_caller]
pub fn serialize_with<T>(value: &T, style: SerializeStyle) -> DiscordDataResult<String>
where
    T: Serialize + ?Sized,
{
    let result = check_finite(value)
        .map_err(|e| e.to_string())
        .and_then(|()| {
            match style {
                SerializeStyle::Compact => serde_json::to_string(value),
                SerializeStyle::Pretty => serde_json::to_string_pretty(value),
            }
            .map_err(|e| e.to_string())
        });

    match result {
        Ok(json) => Ok(json),
        Err(message) => {
            tracing::warn!(
                value_type = std::any::type_name::<T>(),
                error = %message,
                "Value has no JSON representation"
            );
            Err(SerializationError::new(message).into())
        }
    }
}
