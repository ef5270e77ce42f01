//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Builds an `fmt` layer with the shared display options.
macro_rules! fmt_layer {
    ($display:expr, $shape:ident) => {
        tracing_subscriber::fmt::layer()
            .$shape()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub const fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder installs.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the level filter without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive string is malformed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Installs the global subscriber. Events go to stderr.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the level filter is malformed and
    /// [`LogError::AlreadyInitialized`] if a global subscriber is already set.
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = self.config.display;
        let registry = Registry::default().with(filter);

        let installed = match self.config.format {
            Format::Pretty => registry.with(fmt_layer!(display, pretty)).try_init(),
            Format::Compact => registry.with(fmt_layer!(display, compact)).try_init(),
            Format::Json => registry
                .with(fmt_layer!(display, json).flatten_event(true))
                .try_init(),
        };
        installed.map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            target: "formkit::log",
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(())
    }
}
