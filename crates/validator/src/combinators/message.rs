//! MESSAGE combinator - replace a rule's failure message

use std::borrow::Cow;

use crate::foundation::{Outcome, Validate, Value};

/// Replaces the failure message of any rule, keeping its code.
///
/// Built-in rules also take a message through their own `.message(..)`
/// builder; this wrapper works for closures and composites as well.
///
/// ```rust
/// use formkit_validator::prelude::*;
///
/// let signup = compose(rules![required(), email()]).with_message("Enter your work email");
///
/// let error = signup.validate(&Value::text("nope")).unwrap_err();
/// assert_eq!(error.message, "Enter your work email");
/// assert_eq!(error.code, "email");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Wraps `inner` so its failures report `message`.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// The replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    fn validate(&self, value: &Value) -> Outcome {
        self.inner
            .validate(value)
            .map_err(|error| error.with_message(self.message.clone()))
    }
}

/// Free-function form of [`ValidateExt::with_message`](crate::foundation::ValidateExt::with_message).
pub fn with_message<V>(rule: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(rule, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use crate::validators::min_length;

    #[test]
    fn test_passing_value_is_untouched() {
        let rule = WithMessage::new(min_length(3), "Longer please");
        assert!(rule.validate(&Value::text("hello")).is_ok());
        assert_eq!(rule.message(), "Longer please");
    }

    #[test]
    fn test_failure_keeps_code() {
        let rule = with_message(min_length(10), "Password too short");
        let error = rule.validate(&Value::text("short")).unwrap_err();

        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn test_wraps_closures() {
        let no_spaces = |value: &Value| {
            if value.as_text().contains(' ') {
                Err(ValidationError::new("no_spaces", "spaces"))
            } else {
                Ok(())
            }
        };
        let rule = with_message(no_spaces, "No spaces allowed");
        assert_eq!(
            rule.validate(&Value::text("a b")).unwrap_err().message,
            "No spaces allowed"
        );
    }
}
