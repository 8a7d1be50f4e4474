//! Normalized model for Discord data exports.
//!
//! This crate re-exports the record types from `discord_data_core` and the
//! error types from `discord_data_error`, and adds the ambient pieces an
//! application needs around them:
//!
//! - [`DiscordDataConfig`] - TOML configuration for output style and logging
//! - [`init_tracing`] - global tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use discord_data::{Channel, DiscordDataConfig, Message, Server, Timestamp};
//!
//! let channel = Channel::new(
//!     7,
//!     Some("general".to_string()),
//!     Some(Server::new(5, "Guild".to_string())),
//! );
//! let message = Message::new(
//!     99,
//!     Timestamp::parse("2020-06-14 02:35:55+00:00").unwrap(),
//!     channel,
//!     "hello",
//!     "",
//! );
//!
//! assert_eq!(message.channel().description(), "Guild - general");
//! assert_eq!(message.link(), "https://discord.com/channels/5/7/99");
//!
//! let json = DiscordDataConfig::default().serialize(&message).unwrap();
//! assert!(json.contains(r#""timestamp":"2020-06-14T02:35:55+00:00""#));
//! ```

#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{DiscordDataConfig, LoggingConfig, OutputConfig};
pub use observability::init_tracing;

pub use discord_data_core::*;
pub use discord_data_error::*;
