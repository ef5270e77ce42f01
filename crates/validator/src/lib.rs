//! # formkit-validator
//!
//! Composable, stateless validation rules for form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let username = compose(rules![
//!     required(),
//!     min_length(3).message("Too short"),
//!     max_length(20),
//! ]);
//!
//! assert!(username.validate(&Value::text("alice")).is_ok());
//! assert_eq!(
//!     username.validate(&Value::text("al")).unwrap_err().message,
//!     "Too short"
//! );
//! ```
//!
//! ## Rule kinds
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Length**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength)
//! - **Format**: [`Email`](validators::Email), [`Url`](validators::Url),
//!   [`Pattern`](validators::Pattern), [`Password`](validators::Password)
//! - **Numeric**: [`Numeric`](validators::Numeric), [`Min`](validators::Min),
//!   [`Max`](validators::Max)
//! - **Other**: [`Matches`](validators::Matches), [`Custom`](validators::Custom)
//!
//! Every rule except [`Required`](validators::Required) accepts an empty value,
//! so presence and format checks compose without double reporting.

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
