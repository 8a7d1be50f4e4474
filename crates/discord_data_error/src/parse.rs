//! Parse error types.

/// Kinds of parse failures on raw export text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// Embedded payload is not valid JSON
    #[display("Invalid JSON: {}", _0)]
    InvalidJson(String),
    /// Payload is valid JSON but its top level is not an object
    #[display("Expected a JSON object, found {}", _0)]
    NotAnObject(String),
    /// Object holds a value that is not text
    #[display("Expected a text value for key '{}'", _0)]
    NonStringValue(String),
    /// Timestamp string matches none of the accepted export formats
    #[display("Invalid timestamp: {}", _0)]
    InvalidTimestamp(String),
}

/// Parse error with location tracking.
///
/// # Examples
///
/// ```
/// use discord_data_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::InvalidJson("expected value".to_string()));
/// assert!(format!("{}", err).contains("Invalid JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ParseError {
    /// Create a new parse error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
