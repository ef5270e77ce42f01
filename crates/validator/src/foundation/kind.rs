//! Rule kinds and per-kind message overrides

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a built-in rule.
///
/// The snake_case name doubles as the [`ValidationError::code`](super::ValidationError)
/// the rule reports. Deserializes from that name, which also works for map
/// keys in formats that only hand out strings there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum RuleKind {
    /// Value must be present.
    Required,
    /// Minimum character count.
    MinLength,
    /// Maximum character count.
    MaxLength,
    /// Email address syntax.
    Email,
    /// Absolute URL syntax.
    Url,
    /// Value must coerce to a number.
    Numeric,
    /// Numeric lower bound.
    Min,
    /// Numeric upper bound.
    Max,
    /// Regular expression match.
    Pattern,
    /// Password strength policy.
    Password,
    /// Equality with another value.
    Matches,
    /// Caller-supplied predicate.
    Custom,
}

/// Error for a rule name that is not a built-in kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule kind `{0}`")]
pub struct UnknownRuleKind(pub String);

impl RuleKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Required,
        Self::MinLength,
        Self::MaxLength,
        Self::Email,
        Self::Url,
        Self::Numeric,
        Self::Min,
        Self::Max,
        Self::Pattern,
        Self::Password,
        Self::Matches,
        Self::Custom,
    ];

    /// Returns the stable code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Email => "email",
            Self::Url => "url",
            Self::Numeric => "numeric",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pattern => "pattern",
            Self::Password => "password",
            Self::Matches => "matches",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RuleKind {
    type Err = UnknownRuleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| UnknownRuleKind(s.to_owned()))
    }
}

impl TryFrom<String> for RuleKind {
    type Error = UnknownRuleKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleKind> for Cow<'static, str> {
    fn from(kind: RuleKind) -> Self {
        Cow::Borrowed(kind.code())
    }
}

/// Message overrides keyed by rule kind.
///
/// Fields use these to replace the default message of the rules they add on
/// their own (`required` and the field type's format rule).
///
/// # Examples
///
/// ```rust
/// use formkit_validator::foundation::{RuleKind, ValidationMessages};
///
/// let messages = ValidationMessages::new().with(RuleKind::Required, "Pick one");
/// assert_eq!(messages.get(RuleKind::Required), Some("Pick one"));
/// assert_eq!(messages.get(RuleKind::Email), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationMessages(HashMap<RuleKind, String>);

impl ValidationMessages {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, kind: RuleKind, message: impl Into<String>) -> Self {
        self.insert(kind, message);
        self
    }

    /// Inserts or replaces an override.
    pub fn insert(&mut self, kind: RuleKind, message: impl Into<String>) {
        self.0.insert(kind, message.into());
    }

    /// Returns the override for a kind, if any.
    #[must_use]
    pub fn get(&self, kind: RuleKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    /// Returns `true` when no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(RuleKind, String)> for ValidationMessages {
    fn from_iter<I: IntoIterator<Item = (RuleKind, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde_names() {
        for kind in RuleKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_parse_round_trips_codes() {
        for kind in RuleKind::ALL {
            assert_eq!(kind.code().parse::<RuleKind>(), Ok(kind));
        }
        assert_eq!(
            "nope".parse::<RuleKind>(),
            Err(UnknownRuleKind("nope".to_owned()))
        );
    }

    #[test]
    fn test_messages_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            messages: ValidationMessages,
        }

        let doc: Doc = toml::from_str("messages = { min_length = \"Longer please\" }").unwrap();
        assert_eq!(doc.messages.get(RuleKind::MinLength), Some("Longer please"));
    }

    #[test]
    fn test_messages_from_json() {
        let messages: ValidationMessages =
            serde_json::from_str(r#"{"required": "Custom required message", "email": "Bad email"}"#)
                .unwrap();
        assert_eq!(messages.get(RuleKind::Required), Some("Custom required message"));
        assert_eq!(messages.get(RuleKind::Email), Some("Bad email"));
        assert_eq!(messages.get(RuleKind::Url), None);
    }
}
