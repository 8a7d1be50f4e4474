//! Exported chat messages.

use crate::{Channel, Server, Timestamp};
use serde::{Deserialize, Serialize};

/// Base URL of the Discord web client.
pub const DISCORD_BASE_URL: &str = "https://discord.com";

/// A message from the user's export.
///
/// Each message owns a full copy of its channel (and that channel's server).
///
/// # Examples
///
/// ```
/// use discord_data_core::{Channel, Message, Timestamp};
///
/// let message = Message::builder()
///     .message_id(99u64)
///     .timestamp(Timestamp::parse("2020-06-14 02:35:55+00:00").unwrap())
///     .channel(Channel::new(7, None, None))
///     .content("hello")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.link(), "https://discord.com/channels/@me/7/99");
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
pub struct Message {
    /// Discord snowflake ID of the message
    message_id: u64,
    /// When the message was sent, as exported
    timestamp: Timestamp,
    /// Channel the message was sent in
    channel: Channel,
    /// Message text, possibly empty
    #[builder(default)]
    content: String,
    /// Raw attachment column from the export
    #[builder(default)]
    attachments: String,
}

impl Message {
    /// Creates a new message from its exported fields.
    pub fn new(
        message_id: u64,
        timestamp: Timestamp,
        channel: Channel,
        content: impl Into<String>,
        attachments: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            timestamp,
            channel,
            content: content.into(),
            attachments: attachments.into(),
        }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Guild the message was posted in, if any.
    pub fn server(&self) -> Option<&Server> {
        self.channel.server().as_ref()
    }

    /// Permalink that opens this message in the Discord client.
    pub fn link(&self) -> String {
        let channel_id = self.channel.channel_id();
        match self.server() {
            Some(server) => format!(
                "{}/channels/{}/{}/{}",
                DISCORD_BASE_URL,
                server.server_id(),
                channel_id,
                self.message_id
            ),
            None => format!(
                "{}/channels/@me/{}/{}",
                DISCORD_BASE_URL, channel_id, self.message_id
            ),
        }
    }

    /// Attachment URLs, split from the whitespace-separated export column.
    pub fn attachment_urls(&self) -> Vec<&str> {
        self.attachments.split_whitespace().collect()
    }
}
