//! Serialization error types.

/// Serialization error with source location.
///
/// Raised when a value handed to the JSON serializer has no JSON representation.
#[derive(Debug, Clone)]
pub struct SerializationError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SerializationError {
    /// Create a new SerializationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use discord_data_error::SerializationError;
    ///
    /// let err = SerializationError::new("key must be a string");
    /// assert!(err.message.contains("key must be"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Serialization Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for SerializationError {}
