//! Geolocation attached to activity events.

use serde::{Deserialize, Serialize};

/// Where an activity event was recorded from.
///
/// Exports either carry all four fields or none; in the latter case the
/// owning [`Activity`](crate::Activity) holds `None`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct RegionInfo {
    /// City name
    city: String,
    /// ISO country code
    country_code: String,
    /// Region or state code
    region_code: String,
    /// IANA time zone name
    time_zone: String,
}
