//! Configuration error types.

/// Configuration or logging setup failure.
///
/// `origin` names where the bad input came from, such as a TOML file path or
/// the `RUST_LOG` variable, when that is known.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// File path, setting or environment variable the input came from
    pub origin: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use discord_data_error::ConfigError;
    ///
    /// let err = ConfigError::new("unknown variant `yaml` for output.style")
    ///     .with_origin("discord_data.toml");
    /// assert_eq!(err.origin.as_deref(), Some("discord_data.toml"));
    /// assert!(err.to_string().contains("in discord_data.toml"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            origin: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Record where the rejected input came from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: {}", self.message)?;
        if let Some(origin) = &self.origin {
            write!(f, " in {}", origin)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ConfigError {}
