//! Field kinds and declarative field configuration

use serde::{Deserialize, Serialize};

use formkit_validator::config::{RuleConfig, RuleConfigError};
use formkit_validator::foundation::{Rule, RuleKind, ValidateExt, ValidationMessages};
use formkit_validator::validators::{email, numeric, url};

/// Errors raised while turning a [`FieldConfig`] into a controller.
#[derive(Debug, thiserror::Error)]
pub enum FieldConfigError {
    /// One of the field's rules could not be built.
    #[error("field `{field}`: {source}")]
    Rule {
        /// Field name, or `<unnamed>`.
        field: String,
        /// The underlying rule error.
        #[source]
        source: RuleConfigError,
    },
}

/// The input type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text.
    #[default]
    Text,
    /// Email address; adds the `email` rule.
    Email,
    /// Password with a visibility toggle.
    Password,
    /// Number; adds the `numeric` rule.
    Number,
    /// URL; adds the `url` rule.
    Url,
    /// Telephone number.
    Tel,
    /// Search box.
    Search,
    /// Multi-line text.
    Textarea,
    /// Single choice from a list.
    Select,
}

impl FieldKind {
    /// The kind's name as written in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }

    /// The rule kind this field type implies, if any.
    #[must_use]
    pub const fn intrinsic_kind(self) -> Option<RuleKind> {
        match self {
            Self::Email => Some(RuleKind::Email),
            Self::Url => Some(RuleKind::Url),
            Self::Number => Some(RuleKind::Numeric),
            _ => None,
        }
    }

    /// Builds the rule this field type implies, honouring a message override
    /// for its kind.
    #[must_use]
    pub fn intrinsic_rule(self, messages: &ValidationMessages) -> Option<Rule> {
        let kind = self.intrinsic_kind()?;
        let custom = messages.get(kind).map(str::to_owned);
        let rule = match (self, custom) {
            (Self::Email, Some(message)) => email().message(message).boxed(),
            (Self::Email, None) => email().boxed(),
            (Self::Url, Some(message)) => url().message(message).boxed(),
            (Self::Url, None) => url().boxed(),
            (_, Some(message)) => numeric().message(message).boxed(),
            (_, None) => numeric().boxed(),
        };
        Some(rule)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field described as data.
///
/// ```toml
/// name = "email"
/// kind = "email"
/// label = "Email"
/// required = true
/// rules = [{ rule = "max_length", max = 64 }]
/// messages = { required = "We need your email" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Key in the form context. Unnamed fields never talk to the context.
    pub name: Option<String>,
    /// Input type.
    #[serde(alias = "type")]
    pub kind: FieldKind,
    /// Whether a value is required.
    pub required: bool,
    /// Caption shown next to the field.
    pub label: Option<String>,
    /// Field-level disabled flag.
    pub disabled: bool,
    /// Caller rules, run after `required` and the intrinsic rule.
    pub rules: Vec<RuleConfig>,
    /// Message overrides for the `required` and intrinsic rules.
    pub messages: ValidationMessages,
    /// Re-validate on every input, not only on blur.
    pub validate_on_input: bool,
}

impl FieldConfig {
    /// Field name for diagnostics.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_validator::foundation::{Validate, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intrinsic_kinds() {
        assert_eq!(FieldKind::Email.intrinsic_kind(), Some(RuleKind::Email));
        assert_eq!(FieldKind::Url.intrinsic_kind(), Some(RuleKind::Url));
        assert_eq!(FieldKind::Number.intrinsic_kind(), Some(RuleKind::Numeric));
        assert_eq!(FieldKind::Password.intrinsic_kind(), None);
        assert!(FieldKind::Text.intrinsic_rule(&ValidationMessages::new()).is_none());
    }

    #[test]
    fn test_intrinsic_message_override() {
        let messages = ValidationMessages::new().with(RuleKind::Numeric, "Digits please");
        let rule = FieldKind::Number.intrinsic_rule(&messages).unwrap();
        assert_eq!(
            rule.validate(&Value::text("abc")).unwrap_err().message,
            "Digits please"
        );
    }

    #[test]
    fn test_field_config_from_toml() {
        let config: FieldConfig = toml::from_str(
            r#"
            name = "email"
            type = "email"
            label = "Email"
            required = true
            rules = [{ rule = "max_length", max = 64 }]
            messages = { required = "We need your email" }
            "#,
        )
        .unwrap();

        assert_eq!(config.name.as_deref(), Some("email"));
        assert_eq!(config.kind, FieldKind::Email);
        assert!(config.required);
        assert!(!config.validate_on_input);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.messages.get(RuleKind::Required), Some("We need your email"));
    }

    #[test]
    fn test_kind_names_match_serde() {
        for kind in [FieldKind::Text, FieldKind::Textarea, FieldKind::Tel, FieldKind::Select] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_defaults() {
        let config: FieldConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.display_name(), "<unnamed>");
    }
}
