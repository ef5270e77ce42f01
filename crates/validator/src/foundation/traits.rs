//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the type-erased
//! [`Rule`] handle that fields and combinators store.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::combinators::{And, WithMessage};
use crate::foundation::{Outcome, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// A rule is a pure function from a [`Value`] to an [`Outcome`]. Rules hold
/// configuration only; evaluating one never mutates it, so the same rule can
/// be shared by any number of fields.
///
/// Closures of the shape `Fn(&Value) -> Outcome` are rules too.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::foundation::{Outcome, Validate, ValidationError, Value};
///
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(&self, value: &Value) -> Outcome {
///         match value.to_number() {
///             Some(n) if n % 2.0 == 0.0 => Ok(()),
///             _ => Err(ValidationError::new("even", "Must be even")),
///         }
///     }
/// }
///
/// assert!(Even.validate(&Value::Number(4.0)).is_ok());
/// assert!(Even.validate(&Value::Number(3.0)).is_err());
/// ```
pub trait Validate {
    /// Validates the value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is valid
    /// * `Err(ValidationError)` with the message to display otherwise
    fn validate(&self, value: &Value) -> Outcome;
}

impl<F> Validate for F
where
    F: Fn(&Value) -> Outcome,
{
    fn validate(&self, value: &Value) -> Outcome {
        self(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::prelude::*;
///
/// let rule = min_length(3).and(max_length(5)).with_message("3 to 5 characters");
/// assert!(rule.validate(&Value::text("four")).is_ok());
/// assert_eq!(
///     rule.validate(&Value::text("toolong")).unwrap_err().message,
///     "3 to 5 characters"
/// );
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Chains another rule with AND semantics; `self` runs first.
    fn and<R>(self, other: R) -> And<Self, R>
    where
        R: Validate,
    {
        And::new(self, other)
    }

    /// Replaces the failure message, keeping the failing rule's code.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases the rule's type so it can be stored next to other rules.
    fn boxed(self) -> Rule
    where
        Self: Send + Sync + 'static,
    {
        Rule::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// RULE HANDLE
// ============================================================================

/// A type-erased, cheaply clonable rule.
///
/// Clones share the underlying rule; since rules are stateless this is
/// indistinguishable from a deep copy.
#[derive(Clone)]
pub struct Rule {
    inner: Arc<dyn Validate + Send + Sync>,
}

impl Rule {
    /// Wraps a rule.
    pub fn new<V>(rule: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(rule),
        }
    }

    /// Wraps a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Self::new(f)
    }
}

impl Validate for Rule {
    fn validate(&self, value: &Value) -> Outcome {
        self.inner.validate(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
