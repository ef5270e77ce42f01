//! Error type for validation failures
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and default messages does not allocate.

use std::borrow::Cow;

use serde::Serialize;

/// The result of running a rule against a value.
///
/// `Ok(())` is the valid outcome; `Err` carries the failure message.
pub type Outcome = Result<(), ValidationError>;

/// A validation failure.
///
/// The `message` is shown to the user verbatim. Combinators never wrap or
/// merge messages: the first failing rule's message is the one that surfaces.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 5 characters");
/// assert_eq!(error.to_string(), "Must be at least 5 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Machine-readable rule code, e.g. `"required"` or `"min_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message displayed by the field.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Replaces the message, keeping the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the message as a `String`, the form the field state stores.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}
