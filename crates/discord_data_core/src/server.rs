//! Guild (Discord server) records.

use serde::{Deserialize, Serialize};

/// A Discord guild as it appears in the export.
///
/// # Examples
///
/// ```
/// use discord_data_core::Server;
///
/// let server = Server::new(5, "Guild".to_string());
/// assert_eq!(*server.server_id(), 5);
/// assert_eq!(server.name(), "Guild");
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
pub struct Server {
    /// Discord snowflake ID of the guild
    server_id: u64,
    /// Guild name at export time
    name: String,
}
