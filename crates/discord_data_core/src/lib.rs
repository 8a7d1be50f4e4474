//! Data model for a user's exported Discord data.
//!
//! This crate provides immutable value types for the records found in a
//! Discord data export (servers, channels, messages and account activity
//! events), the derived values shown to users (channel labels, message
//! permalinks, activity payloads) and the JSON serialization contract.

#![warn(missing_docs)]

mod activity;
mod channel;
mod finite;
mod fingerprint;
mod message;
mod region_info;
mod serialize;
mod server;
mod timestamp;

pub use activity::{Activity, ActivityBuilder, ActivityBuilderError};
pub use channel::Channel;
pub use fingerprint::{FINGERPRINT_FIELDS, Fingerprint, FingerprintBuilder, FingerprintBuilderError};
pub use message::{DISCORD_BASE_URL, Message, MessageBuilder, MessageBuilderError};
pub use region_info::RegionInfo;
pub use serialize::{SerializeStyle, serialize, serialize_with};
pub use server::Server;
pub use timestamp::Timestamp;
