//! Error handling for formkit-log

/// Result alias for logging operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive string as given.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// The output format name is not recognised.
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber was already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}
