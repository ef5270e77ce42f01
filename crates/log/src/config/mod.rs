//! Configuration types
//!
//! - `base`: [`Config`], [`Format`] and [`DisplayConfig`]
//! - `presets`: development and production setups plus environment resolution

mod base;
mod presets;

pub use base::{Config, DisplayConfig, Format};
pub use presets::{ENV_FORMAT, ENV_LEVEL, ENV_RUST_LOG};
