//! Presence rule

use std::borrow::Cow;

use crate::foundation::{Outcome, RuleKind, Validate, ValidationError, Value};

/// Fails when the value is empty (`Null` or the empty string).
///
/// The only built-in rule that does not skip empty values. Whitespace is
/// content: `" "` passes.
#[derive(Debug, Clone)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "This field is required";

    /// Creates the rule with its default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }

    /// Replaces the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the message reported on failure.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.message
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Required {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_empty() {
            Err(ValidationError::new(RuleKind::Required, self.message.clone()))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] rule.
#[must_use]
pub fn required() -> Required {
    Required::new()
}
