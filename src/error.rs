//! Error types for robokit

/// Result type alias
pub type Result<T> = std::result::Result<T, RobokitError>;

/// robokit error types
#[derive(Debug, thiserror::Error)]
pub enum RobokitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed, serialized or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background thread could not be spawned
    #[error("Failed to spawn {name} thread: {source}")]
    ThreadSpawn {
        /// Thread name
        name: &'static str,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for RobokitError {
    fn from(e: toml::de::Error) -> Self {
        RobokitError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for RobokitError {
    fn from(e: toml::ser::Error) -> Self {
        RobokitError::Config(e.to_string())
    }
}
