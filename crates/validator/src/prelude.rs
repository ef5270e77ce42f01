//! Prelude module for convenient imports.
//!
//! Provides a single `use formkit_validator::prelude::*;` import that brings
//! in the traits, the value type, every built-in rule and the combinators.
//!
//! # Examples
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let username = compose(rules![required(), min_length(3), max_length(20)]);
//! let age = numeric().and(min(18.0)).and(max(120.0));
//!
//! assert!(username.validate(&Value::text("alice")).is_ok());
//! assert!(age.validate(&Value::text("17")).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{
    Outcome, Rule, RuleKind, Validate, ValidateExt, ValidationError, ValidationMessages, Value,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::{
    Custom, Email, Matches, Max, MaxLength, Min, MinLength, Numeric, Password, PasswordPolicy,
    Pattern, Required, Url, custom, email, matches, max, max_length, min, min_length, numeric,
    password, pattern, required, url,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Compose, Rules, WithMessage, and, compose, with_message};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{RuleConfig, RuleConfigError, build_rules};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{rule, rules};
