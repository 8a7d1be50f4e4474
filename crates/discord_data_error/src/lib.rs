//! Error types for the discord_data export model.
//!
//! Every error records the file and line where it was created. The
//! crate-level [`DiscordDataError`] wraps each of them so callers can use a
//! single result type with `?`.

#![warn(missing_docs)]

mod config;
mod parse;
mod serialization;

pub use config::ConfigError;
pub use parse::{ParseError, ParseErrorKind};
pub use serialization::SerializationError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum DiscordDataErrorKind {
    /// Raw export text could not be parsed
    Parse(ParseError),
    /// Value could not be represented as JSON
    Serialization(SerializationError),
    /// Configuration could not be loaded
    Config(ConfigError),
}

impl std::fmt::Display for DiscordDataErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscordDataErrorKind::Parse(e) => write!(f, "{}", e),
            DiscordDataErrorKind::Serialization(e) => write!(f, "{}", e),
            DiscordDataErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Discord data error with kind discrimination.
///
/// # Examples
///
/// ```
/// use discord_data_error::{DiscordDataError, DiscordDataErrorKind, SerializationError};
///
/// let err: DiscordDataError = SerializationError::new("unsupported value").into();
/// assert!(matches!(err.kind(), DiscordDataErrorKind::Serialization(_)));
/// ```
#[derive(Debug)]
pub struct DiscordDataError(Box<DiscordDataErrorKind>);

impl DiscordDataError {
    /// Create a new error from a kind.
    pub fn new(kind: DiscordDataErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiscordDataErrorKind {
        &self.0
    }

    /// Returns the parse error if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self.kind() {
            DiscordDataErrorKind::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiscordDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Discord Data Error: {}", self.0)
    }
}

impl std::error::Error for DiscordDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            DiscordDataErrorKind::Parse(e) => Some(e),
            DiscordDataErrorKind::Serialization(e) => Some(e),
            DiscordDataErrorKind::Config(e) => Some(e),
        }
    }
}

impl<T> From<T> for DiscordDataError
where
    T: Into<DiscordDataErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for discord_data operations.
pub type DiscordDataResult<T> = std::result::Result<T, DiscordDataError>;
