//! Declarative rule configuration
//!
//! [`RuleConfig`] describes a built-in rule as data, so forms can be defined
//! in TOML or JSON and turned into [`Rule`]s at load time.
//!
//! ```toml
//! rules = [
//!     { rule = "min_length", min = 3 },
//!     { rule = "pattern", pattern = "^[a-z]+$", message = "Lowercase only" },
//! ]
//! ```
//!
//! `custom` has no configuration form: predicates are code.

use serde::{Deserialize, Serialize};

use crate::combinators::Rules;
use crate::foundation::{Rule, RuleKind, Value};
use crate::validators::{self, PasswordPolicy};

/// Errors raised while building rules from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    /// The `pattern` rule's expression does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        /// The offending expression.
        pattern: String,
        /// The compile error.
        #[source]
        source: regex::Error,
    },
}

/// A built-in rule described as data.
///
/// Every variant takes an optional `message` that replaces the default one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    /// See [`validators::Required`].
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::MinLength`].
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::MaxLength`].
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Email`].
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Url`].
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Numeric`].
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Min`].
    Min {
        min: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Max`].
    Max {
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Pattern`].
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Password`]. Policy keys sit next to `rule`.
    Password {
        #[serde(flatten)]
        policy: PasswordPolicy,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`validators::Matches`].
    Matches {
        other: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleConfig {
    /// Returns the kind of rule this configuration builds.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required { .. } => RuleKind::Required,
            Self::MinLength { .. } => RuleKind::MinLength,
            Self::MaxLength { .. } => RuleKind::MaxLength,
            Self::Email { .. } => RuleKind::Email,
            Self::Url { .. } => RuleKind::Url,
            Self::Numeric { .. } => RuleKind::Numeric,
            Self::Min { .. } => RuleKind::Min,
            Self::Max { .. } => RuleKind::Max,
            Self::Pattern { .. } => RuleKind::Pattern,
            Self::Password { .. } => RuleKind::Password,
            Self::Matches { .. } => RuleKind::Matches,
        }
    }

    /// Builds the rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigError::Pattern`] when a pattern does not compile.
    pub fn build(&self) -> Result<Rule, RuleConfigError> {
        let rule = match self.clone() {
            Self::Required { message } => {
                with_override(validators::required(), message, validators::Required::message)
            }
            Self::MinLength { min, message } => {
                with_override(validators::min_length(min), message, validators::MinLength::message)
            }
            Self::MaxLength { max, message } => {
                with_override(validators::max_length(max), message, validators::MaxLength::message)
            }
            Self::Email { message } => {
                with_override(validators::email(), message, validators::Email::message)
            }
            Self::Url { message } => {
                with_override(validators::url(), message, validators::Url::message)
            }
            Self::Numeric { message } => {
                with_override(validators::numeric(), message, validators::Numeric::message)
            }
            Self::Min { min, message } => {
                with_override(validators::min(min), message, validators::Min::message)
            }
            Self::Max { max, message } => {
                with_override(validators::max(max), message, validators::Max::message)
            }
            Self::Pattern { pattern, message } => {
                let regex = regex::Regex::new(&pattern)
                    .map_err(|source| RuleConfigError::Pattern { pattern, source })?;
                with_override(validators::pattern(regex), message, validators::Pattern::message)
            }
            Self::Password { policy, message } => {
                with_override(validators::password(policy), message, validators::Password::message)
            }
            Self::Matches { other, message } => {
                with_override(validators::matches(other), message, validators::Matches::message)
            }
        };

        tracing::trace!(
            target: "formkit::validator",
            kind = %self.kind(),
            "built rule from config"
        );
        Ok(rule)
    }
}

fn with_override<V, F>(rule: V, message: Option<String>, set: F) -> Rule
where
    V: crate::foundation::Validate + Send + Sync + 'static,
    F: FnOnce(V, String) -> V,
{
    match message {
        Some(message) => Rule::new(set(rule, message)),
        None => Rule::new(rule),
    }
}

/// Builds every configured rule, in order.
///
/// # Errors
///
/// Returns the first [`RuleConfigError`] encountered.
pub fn build_rules<'a>(
    configs: impl IntoIterator<Item = &'a RuleConfig>,
) -> Result<Rules, RuleConfigError> {
    configs.into_iter().map(RuleConfig::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Doc {
        rules: Vec<RuleConfig>,
    }

    fn parse(toml_src: &str) -> Vec<RuleConfig> {
        toml::from_str::<Doc>(toml_src).unwrap().rules
    }

    #[test]
    fn test_toml_rules_behave_like_factories() {
        let configs = parse(
            r#"
            rules = [
                { rule = "required" },
                { rule = "min_length", min = 3, message = "Too short" },
                { rule = "max_length", max = 5 },
            ]
            "#,
        );
        let rule = crate::combinators::compose(build_rules(&configs).unwrap());

        assert_eq!(rule.validate(&Value::Null).unwrap_err().message, "This field is required");
        assert_eq!(rule.validate(&Value::text("ab")).unwrap_err().message, "Too short");
        assert_eq!(
            rule.validate(&Value::text("abcdef")).unwrap_err().message,
            "Cannot exceed 5 characters"
        );
        assert!(rule.validate(&Value::text("abcd")).is_ok());
    }

    #[test]
    fn test_password_policy_is_flattened() {
        let configs = parse(
            r#"
            rules = [{ rule = "password", min_length = 4, require_special = false }]
            "#,
        );
        assert_eq!(
            configs[0],
            RuleConfig::Password {
                policy: PasswordPolicy::default().min_length(4).require_special(false),
                message: None,
            }
        );
        let rule = configs[0].build().unwrap();
        assert!(rule.validate(&Value::text("Abc1")).is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let config = RuleConfig::Pattern {
            pattern: "([a-z".to_owned(),
            message: None,
        };
        let err = config.build().unwrap_err();
        assert!(matches!(err, RuleConfigError::Pattern { ref pattern, .. } if pattern == "([a-z"));
        assert!(err.to_string().starts_with("invalid pattern `([a-z`"));
    }

    #[test]
    fn test_kind_matches_tag() {
        let config: RuleConfig = serde_json::from_str(r#"{"rule": "min", "min": 1}"#).unwrap();
        assert_eq!(config.kind(), RuleKind::Min);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({"rule": "min", "min": 1.0})
        );
    }

    #[test]
    fn test_matches_from_json() {
        let config: RuleConfig = serde_json::from_str(
            r#"{"rule": "matches", "other": "secret", "message": "Nope"}"#,
        )
        .unwrap();
        let rule = config.build().unwrap();
        assert!(rule.validate(&Value::text("secret")).is_ok());
        assert_eq!(rule.validate(&Value::text("other")).unwrap_err().message, "Nope");
    }
}
