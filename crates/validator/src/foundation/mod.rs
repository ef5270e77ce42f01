//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], the loosely typed field value every rule inspects
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Rules**: [`Rule`], the type-erased handle fields store
//! - **Errors**: [`ValidationError`], [`Outcome`]
//! - **Kinds**: [`RuleKind`], [`ValidationMessages`]
//!
//! # Outcomes
//!
//! A rule has exactly two outcomes. `Ok(())` means the value is valid;
//! `Err(error)` means it is invalid and `error.message` is what the field
//! shows. There is no warning level and no partial validity.
//!
//! ```rust
//! use formkit_validator::foundation::{Outcome, Validate, ValidationError, Value};
//!
//! let no_spaces = |value: &Value| -> Outcome {
//!     if value.as_text().contains(' ') {
//!         Err(ValidationError::new("no_spaces", "Spaces are not allowed"))
//!     } else {
//!         Ok(())
//!     }
//! };
//!
//! assert!(no_spaces.validate(&Value::text("alice")).is_ok());
//! assert!(no_spaces.validate(&Value::text("a b")).is_err());
//! ```

pub mod error;
pub mod kind;
pub mod traits;
pub mod value;

pub use error::{Outcome, ValidationError};
pub use kind::{RuleKind, UnknownRuleKind, ValidationMessages};
pub use traits::{Rule, Validate, ValidateExt};
pub use value::Value;
