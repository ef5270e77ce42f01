//! Password strength rule

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{Outcome, RuleKind, Validate, ValidationError, Value};

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

// ============================================================================
// POLICY
// ============================================================================

/// Which requirements a password must meet.
///
/// Every requirement is on by default with a minimum of 8 characters.
/// Deserializes with missing keys falling back to those defaults.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::validators::PasswordPolicy;
///
/// let policy = PasswordPolicy::default().min_length(12).require_special(false);
/// assert_eq!(policy.min_length, 12);
/// assert!(policy.require_uppercase);
/// assert!(!policy.require_special);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum number of characters; `0` disables the check.
    pub min_length: usize,
    /// At least one ASCII uppercase letter.
    pub require_uppercase: bool,
    /// At least one ASCII lowercase letter.
    pub require_lowercase: bool,
    /// At least one ASCII digit.
    pub require_number: bool,
    /// At least one of [`SPECIAL_CHARACTERS`].
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special: true,
        }
    }
}

impl PasswordPolicy {
    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the uppercase requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self, on: bool) -> Self {
        self.require_uppercase = on;
        self
    }

    /// Sets the lowercase requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self, on: bool) -> Self {
        self.require_lowercase = on;
        self
    }

    /// Sets the digit requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_number(mut self, on: bool) -> Self {
        self.require_number = on;
        self
    }

    /// Sets the special-character requirement.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_special(mut self, on: bool) -> Self {
        self.require_special = on;
        self
    }

    /// Lists the unmet requirements for `password`, in a fixed order.
    #[must_use]
    pub fn missing(&self, password: &str) -> Vec<String> {
        let mut missing = Vec::new();

        if self.min_length > 0 && password.chars().count() < self.min_length {
            missing.push(format!("At least {} characters", self.min_length));
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            missing.push("One uppercase letter".to_owned());
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            missing.push("One lowercase letter".to_owned());
        }
        if self.require_number && !password.chars().any(|c| c.is_ascii_digit()) {
            missing.push("One number".to_owned());
        }
        if self.require_special && !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            missing.push("One special character".to_owned());
        }

        missing
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Checks a password against a [`PasswordPolicy`].
///
/// The default message names every unmet requirement:
/// `Password must include: One number, One special character`. A message set
/// with [`Password::message`] replaces that whole sentence.
#[derive(Debug, Clone, Default)]
pub struct Password {
    policy: PasswordPolicy,
    message: Option<Cow<'static, str>>,
}

impl Password {
    /// Creates the rule for a policy.
    #[must_use]
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            message: None,
        }
    }

    /// Replaces the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the policy.
    #[must_use]
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }
}

impl Validate for Password {
    fn validate(&self, value: &Value) -> Outcome {
        if value.is_empty() {
            return Ok(());
        }

        let missing = self.policy.missing(&value.as_text());
        if missing.is_empty() {
            return Ok(());
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None => Cow::Owned(format!("Password must include: {}", missing.join(", "))),
        };
        Err(ValidationError::new(RuleKind::Password, message))
    }
}

/// Creates a [`Password`] rule.
#[must_use]
pub fn password(policy: PasswordPolicy) -> Password {
    Password::new(policy)
}
