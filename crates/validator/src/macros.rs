//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Create a skip-if-empty rule (struct + `Validate` impl + factory fn)
//! - [`rules!`]: Build an ordered [`Rules`](crate::combinators::Rules) sequence
//!
//! # Examples
//!
//! ```rust
//! use formkit_validator::rule;
//! use formkit_validator::foundation::Validate;
//!
//! rule! {
//!     /// Digits only.
//!     pub Digits {};
//!     kind: Pattern;
//!     message { "Digits only" }
//!     rule(self, input) { input.as_text().chars().all(|c| c.is_ascii_digit()) }
//!     fn digits;
//! }
//!
//! assert!(digits().validate(&"123".into()).is_ok());
//! assert!(digits().validate(&"".into()).is_ok());
//! assert_eq!(digits().validate(&"12a".into()).unwrap_err().message, "Digits only");
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, constructor, message
/// override, `Validate` implementation and factory function.
///
/// The generated rule skips empty values (they are valid) and fails with its
/// message otherwise. The struct gets one public field per declared field
/// plus a private `message` whose default is the `message` block, evaluated
/// with the constructor arguments in scope.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize };
///     kind: MinLength;
///     message { format!("Must be at least {min} characters") }
///     rule(self, input) { input.char_len() >= self.min }
///     fn min_length;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),* $(,)? };
        kind: $kind:ident;
        message $msg:block
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)*
            message: ::std::borrow::Cow<'static, str>,
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the rule with its default message.
            #[must_use]
            pub fn new($($field: $fty),*) -> Self {
                let message: ::std::borrow::Cow<'static, str> = ($msg).into();
                Self { $($field,)* message }
            }

            /// Replaces the failure message.
            #[must_use = "builder methods must be chained or built"]
            pub fn message(mut self, message: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.message = message.into();
                self
            }

            /// Returns the message reported on failure.
            #[must_use]
            pub fn error_message(&self) -> &str {
                &self.message
            }
        }

        impl $crate::foundation::Validate for $name {
            fn validate(&$self_, $inp: &$crate::foundation::Value) -> $crate::foundation::Outcome {
                if $inp.is_empty() || $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::ValidationError::new(
                        $crate::foundation::RuleKind::$kind,
                        $self_.message.clone(),
                    ))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($field: $fty),*) -> $name {
            $name::new($($field),*)
        }
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds an ordered [`Rules`](crate::combinators::Rules) sequence from
/// rules of different types.
///
/// ```rust
/// use formkit_validator::prelude::*;
///
/// let rule = compose(rules![required(), min_length(3)]);
/// assert!(rule.validate(&Value::Null).is_err());
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        $crate::combinators::Rules::new()
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::Rules::from(::std::vec![
            $($crate::foundation::Rule::new($rule)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================
