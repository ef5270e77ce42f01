//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Level filter read first.
pub const ENV_LEVEL: &str = "FORMKIT_LOG";
/// Level filter read when [`ENV_LEVEL`] is unset.
pub const ENV_RUST_LOG: &str = "RUST_LOG";
/// Output format name.
pub const ENV_FORMAT: &str = "FORMKIT_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// `FORMKIT_LOG` wins over `RUST_LOG`. An unrecognised
    /// `FORMKIT_LOG_FORMAT` keeps the default format.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LEVEL).or_else(|| lookup(ENV_RUST_LOG)) {
            config.level = level;
        }

        if let Some(format) = lookup(ENV_FORMAT).and_then(|f| f.parse().ok()) {
            config.format = format;
        }

        config
    }

    /// Whether either level variable is present in the lookup.
    pub fn level_in(lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup(ENV_LEVEL).is_some() || lookup(ENV_RUST_LOG).is_some()
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }
}
