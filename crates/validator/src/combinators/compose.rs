//! COMPOSE combinator - ordered, short-circuiting conjunction
//!
//! [`compose`] is the single entry point fields use to combine rules. It
//! takes one rule or many (anything convertible into [`Rules`]) so callers
//! never inspect what they were handed.
//!
//! Evaluation order is the caller's order. That order is also the tie-break:
//! when several rules would fail, the first one's message is the one shown.

use crate::foundation::{Outcome, Rule, Validate, Value};

// ============================================================================
// RULES
// ============================================================================

/// An ordered sequence of rules.
///
/// Converts from a single [`Rule`], a `Vec<Rule>`, an array, or an iterator,
/// which is how "one rule or a list of rules" is accepted uniformly.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::prelude::*;
///
/// let one: Rules = email().boxed().into();
/// let many: Rules = rules![required(), email()];
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rules(Vec<Rule>);

impl Rules {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }
}

impl From<Rule> for Rules {
    fn from(rule: Rule) -> Self {
        Self(vec![rule])
    }
}

impl From<Vec<Rule>> for Rules {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl<const N: usize> From<[Rule; N]> for Rules {
    fn from(rules: [Rule; N]) -> Self {
        Self(rules.into())
    }
}

impl From<Option<Rules>> for Rules {
    fn from(rules: Option<Rules>) -> Self {
        rules.unwrap_or_default()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Rule> for Rules {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Rules {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// COMPOSE
// ============================================================================

/// Runs rules in order and stops at the first failure.
///
/// An empty `Compose` accepts every value. The failing rule's error is
/// returned as is; messages are never merged.
#[derive(Debug, Clone, Default)]
pub struct Compose {
    rules: Rules,
}

impl Compose {
    /// Creates a composite rule.
    pub fn new(rules: impl Into<Rules>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Returns the composed rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Validate for Compose {
    fn validate(&self, value: &Value) -> Outcome {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.validate(value) {
                tracing::trace!(
                    target: "formkit::validator",
                    index,
                    code = %error.code,
                    "rule failed"
                );
                return Err(error);
            }
        }
        Ok(())
    }
}

/// Composes one rule or an ordered sequence of rules.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::prelude::*;
/// use regex::Regex;
///
/// let rule = compose(rules![
///     min_length(3).message("Too short"),
///     pattern(Regex::new("[A-Z]").unwrap()).message("Needs uppercase"),
/// ]);
///
/// assert_eq!(rule.validate(&Value::text("ab")).unwrap_err().message, "Too short");
/// assert_eq!(rule.validate(&Value::text("abcdef")).unwrap_err().message, "Needs uppercase");
/// assert!(rule.validate(&Value::text("abcDef")).is_ok());
/// ```
pub fn compose(rules: impl Into<Rules>) -> Compose {
    Compose::new(rules)
}
