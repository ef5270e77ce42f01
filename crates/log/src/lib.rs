//! # formkit-log
//!
//! Logging bootstrap for formkit binaries.
//!
//! Library crates only emit `tracing` events (targets `formkit::validator`,
//! `formkit::form`, `formkit::disclosure`). A binary installs a subscriber
//! once at startup:
//!
//! ```rust,no_run
//! use formkit_log::{Config, Format};
//!
//! formkit_log::init_with(Config::from_env().with_format(Format::Compact))?;
//! tracing::info!("ready");
//! # Ok::<(), formkit_log::LogError>(())
//! ```
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `FORMKIT_LOG` | Level filter, `EnvFilter` syntax |
//! | `RUST_LOG` | Level filter when `FORMKIT_LOG` is unset |
//! | `FORMKIT_LOG_FORMAT` | `pretty`, `compact` or `json` |

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, ENV_FORMAT, ENV_LEVEL, ENV_RUST_LOG, Format};
pub use error::{LogError, LogResult};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Picks a configuration and installs it.
///
/// Uses the environment when a level variable is set, otherwise
/// [`Config::development`] in debug builds and [`Config::production`] in
/// release builds.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<()> {
    let lookup = |key: &str| std::env::var(key).ok();
    if Config::level_in(lookup) {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
