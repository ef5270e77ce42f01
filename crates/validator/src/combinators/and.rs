//! AND combinator - two rules, first failure wins
//!
//! [`And`] is the statically typed two-rule form of
//! [`Compose`](super::Compose): useful when building a rule inline with
//! [`ValidateExt::and`](crate::foundation::ValidateExt::and) before erasing
//! it into a [`Rule`](crate::foundation::Rule).
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let handle = required().and(min_length(3));
//! assert_eq!(handle.validate(&Value::Null).unwrap_err().code, "required");
//! assert_eq!(handle.validate(&Value::text("al")).unwrap_err().code, "min_length");
//! assert!(handle.validate(&Value::text("alice")).is_ok());
//! ```

use crate::foundation::{Outcome, Validate, Value};

/// Runs `first`, then `second` only if `first` passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> And<A, B> {
    /// Pairs two rules; `first` is evaluated first.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The rule evaluated first.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The rule evaluated only when the first passes.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Validate for And<A, B>
where
    A: Validate,
    B: Validate,
{
    fn validate(&self, value: &Value) -> Outcome {
        self.first.validate(value)?;
        self.second.validate(value)
    }
}

/// Free-function form of [`ValidateExt::and`](crate::foundation::ValidateExt::and).
pub fn and<A, B>(first: A, second: B) -> And<A, B>
where
    A: Validate,
    B: Validate,
{
    And::new(first, second)
}
