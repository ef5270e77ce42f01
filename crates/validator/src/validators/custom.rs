//! Predicate rule

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Outcome, RuleKind, Validate, ValidationError, Value};

/// Accepts a value when a caller-supplied predicate returns `true`.
///
/// Like every rule except `required`, empty values pass without calling the
/// predicate. The message is fixed per rule; use a hand-written
/// [`Validate`] impl when it must depend on the value.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::prelude::*;
///
/// let even = custom(|v: &Value| v.to_number().is_some_and(|n| n % 2.0 == 0.0))
///     .message("Must be even");
///
/// assert!(even.validate(&Value::Number(4.0)).is_ok());
/// assert_eq!(even.validate(&Value::Number(3.0)).unwrap_err().message, "Must be even");
/// ```
#[derive(Clone)]
pub struct Custom {
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    message: Cow<'static, str>,
}

impl Custom {
    /// Creates the rule with the default message `Invalid value`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: Cow::Borrowed("Invalid value"),
        }
    }

    /// Replaces the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validate for Custom {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_empty() || (self.predicate)(value) {
            Ok(())
        } else {
            Err(ValidationError::new(RuleKind::Custom, self.message.clone()))
        }
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Custom`] rule.
pub fn custom<F>(predicate: F) -> Custom
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Custom::new(predicate)
}
