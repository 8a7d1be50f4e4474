//! Channel records and their display labels.

use crate::Server;
use serde::{Deserialize, Serialize};

/// A channel a message was found in.
///
/// A channel without a server is a direct or group message context. Guild
/// channels may still lack a name in the export.
///
/// # Examples
///
/// ```
/// use discord_data_core::{Channel, Server};
///
/// let dm = Channel::new(42, None, None);
/// assert_eq!(dm.description(), "channel (42)");
///
/// let general = Channel::new(
///     7,
///     Some("general".to_string()),
///     Some(Server::new(5, "Guild".to_string())),
/// );
/// assert_eq!(general.description(), "Guild - general");
/// ```
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
pub struct Channel {
    /// Discord snowflake ID of the channel
    channel_id: u64,
    /// Channel name, if the export recorded one
    name: Option<String>,
    /// Owning guild; `None` for direct messages
    server: Option<Server>,
}

impl Channel {
    /// True if this channel belongs to no guild.
    pub fn is_direct_message(&self) -> bool {
        self.server.is_none()
    }

    /// Short human-readable label for where a message was found.
    pub fn description(&self) -> String {
        match (&self.server, &self.name) {
            (None, Some(name)) => name.clone(),
            (None, None) => format!("channel ({})", self.channel_id),
            (Some(server), Some(name)) => format!("{} - {}", server.name(), name),
            (Some(server), None) => server.name().clone(),
        }
    }
}
