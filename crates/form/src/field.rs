//! Per-field validation controller
//!
//! A [`FieldController`] owns one field's runtime state (value, last error,
//! touched flag) and decides when validation runs. It never renders anything:
//! the caller feeds it UI events and reads back what to display.
//!
//! ## Applied rule
//!
//! The rule a field actually runs is rebuilt whenever its configuration
//! changes, always in this order:
//!
//! 1. `required`, when the field is required
//! 2. the field type's intrinsic rule (`email`, `url` or `numeric`)
//! 3. the caller's rules
//!
//! ## Triggers
//!
//! Validation runs on blur ([`FieldController::on_blur`]) and when called
//! explicitly ([`FieldController::validate`], [`FieldController::validate_current`]).
//! Input events only re-validate when [`FieldController::validate_on_input`]
//! is set.

use std::borrow::Cow;
use std::fmt;

use formkit_validator::combinators::{Compose, Rules, compose};
use formkit_validator::foundation::{
    Rule, RuleKind, Validate, ValidateExt, ValidationError, ValidationMessages, Value,
};
use formkit_validator::validators::required;

use crate::config::{FieldConfig, FieldConfigError, FieldKind};
use crate::context::SharedContext;
use crate::display::{ErrorDisplay, ErrorOverrides, required_label, resolve_error};

// ============================================================================
// STATE
// ============================================================================

/// Runtime state of one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    /// Current value.
    pub value: Value,
    /// Message of the last failed validation; `None` after a pass.
    pub local_error: Option<String>,
    /// Whether the field has lost focus at least once.
    pub touched: bool,
    /// Whether a password field currently shows its text.
    pub revealed: bool,
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Validation controller for a single form field.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use formkit_form::{FieldController, FieldKind, FormContext, FormStore};
/// use formkit_validator::prelude::*;
///
/// let store = Arc::new(FormStore::new());
/// let mut field = FieldController::new(FieldKind::Text)
///     .name("username")
///     .label("Username")
///     .required(true)
///     .rule(min_length(3).message("Too short"))
///     .context(store.clone());
///
/// field.on_input("ab");
/// assert!(!field.on_blur());
/// assert_eq!(store.error("username").as_deref(), Some("Too short"));
/// assert_eq!(field.display_label().as_deref(), Some("Username *"));
///
/// field.on_input("abc");
/// assert!(field.validate_current());
/// assert_eq!(store.error("username"), None);
/// ```
#[derive(Clone)]
pub struct FieldController {
    name: Option<String>,
    kind: FieldKind,
    required: bool,
    label: Option<String>,
    disabled: bool,
    rules: Rules,
    messages: ValidationMessages,
    validate_on_input: bool,
    overrides: ErrorOverrides,
    context: Option<SharedContext>,
    applied: Compose,
    state: FieldState,
}

impl FieldController {
    /// Creates an unnamed, optional field of the given kind.
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        let mut field = Self {
            name: None,
            kind,
            required: false,
            label: None,
            disabled: false,
            rules: Rules::new(),
            messages: ValidationMessages::new(),
            validate_on_input: false,
            overrides: ErrorOverrides::default(),
            context: None,
            applied: Compose::default(),
            state: FieldState::default(),
        };
        field.refresh_rule();
        field
    }

    /// Creates a controller from a declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FieldConfigError::Rule`] when one of the configured rules
    /// cannot be built.
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldConfigError> {
        let rules = formkit_validator::config::build_rules(&config.rules).map_err(|source| {
            FieldConfigError::Rule {
                field: config.display_name().to_owned(),
                source,
            }
        })?;

        let mut field = Self::new(config.kind);
        field.name.clone_from(&config.name);
        field.label.clone_from(&config.label);
        field.required = config.required;
        field.disabled = config.disabled;
        field.rules = rules;
        field.messages = config.messages.clone();
        field.validate_on_input = config.validate_on_input;
        field.refresh_rule();
        Ok(field)
    }

    // ------------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------------

    /// Sets the field name, its key in the form context.
    #[must_use = "builder methods must be chained or built"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the caption.
    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the field required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.set_required(required);
        self
    }

    /// Sets the field-level disabled flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends a caller rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(rule));
        self.refresh_rule();
        self
    }

    /// Replaces the caller rules with one rule or an ordered sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(mut self, rules: impl Into<Rules>) -> Self {
        self.set_rules(rules);
        self
    }

    /// Sets message overrides for the `required` and intrinsic rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn messages(mut self, messages: ValidationMessages) -> Self {
        self.set_messages(messages);
        self
    }

    /// Re-validate on every input, not only on blur.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_on_input(mut self, on: bool) -> Self {
        self.validate_on_input = on;
        self
    }

    /// Attaches the form context this field reports into.
    #[must_use = "builder methods must be chained or built"]
    pub fn context(mut self, context: SharedContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Sets the explicit error message override.
    #[must_use = "builder methods must be chained or built"]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.overrides.error_message = Some(message.into());
        self
    }

    /// Sets the alternate error override.
    #[must_use = "builder methods must be chained or built"]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.overrides.error = Some(message.into());
        self
    }

    /// Sets the message-less error flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_error(mut self, has_error: bool) -> Self {
        self.overrides.has_error = has_error;
        self
    }

    /// Sets the initial value without notifying the context or validating.
    #[must_use = "builder methods must be chained or built"]
    pub fn initial_value(mut self, value: impl Into<Value>) -> Self {
        self.state.value = value.into();
        self
    }

    // ------------------------------------------------------------------------
    // Configuration changes
    // ------------------------------------------------------------------------

    /// Changes the required flag and rebuilds the applied rule.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
        self.refresh_rule();
    }

    /// Replaces the caller rules and rebuilds the applied rule.
    pub fn set_rules(&mut self, rules: impl Into<Rules>) {
        self.rules = rules.into();
        self.refresh_rule();
    }

    /// Replaces the message overrides and rebuilds the applied rule.
    pub fn set_messages(&mut self, messages: ValidationMessages) {
        self.messages = messages;
        self.refresh_rule();
    }

    /// Replaces the parent-supplied error overrides.
    pub fn set_overrides(&mut self, overrides: ErrorOverrides) {
        self.overrides = overrides;
    }

    /// Changes the field-level disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn refresh_rule(&mut self) {
        let mut rules = Rules::new();
        if self.required {
            let rule = match self.messages.get(RuleKind::Required) {
                Some(message) => required().message(message.to_owned()),
                None => required(),
            };
            rules.push(rule.boxed());
        }
        if let Some(intrinsic) = self.kind.intrinsic_rule(&self.messages) {
            rules.push(intrinsic);
        }
        rules.extend(self.rules.iter().cloned());

        tracing::trace!(
            target: "formkit::form",
            field = self.display_name(),
            rules = rules.len(),
            "rebuilt applied rule"
        );
        self.applied = compose(rules);
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Runs the applied rule against `value`.
    ///
    /// Stores the failure message (or clears it on a pass) and reports the
    /// same to the form context. Does not change the stored value or the
    /// touched flag, so repeated calls with the same value are idempotent.
    pub fn validate(&mut self, value: &Value) -> bool {
        let error = self
            .applied
            .validate(value)
            .err()
            .map(ValidationError::into_message);
        let valid = error.is_none();

        tracing::debug!(
            target: "formkit::form",
            field = self.display_name(),
            valid,
            error = error.as_deref().unwrap_or_default(),
            "validated field"
        );

        if let Some((name, context)) = self.attached() {
            context.set_field_error(name, error.clone());
        }
        self.state.local_error = error;
        valid
    }

    /// Validates the current value. Used for explicit, eager validation such
    /// as a submit pass.
    pub fn validate_current(&mut self) -> bool {
        let value = self.state.value.clone();
        self.validate(&value)
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Handles a value change.
    ///
    /// Returns the validation result when the field validates on input,
    /// `None` otherwise.
    pub fn on_input(&mut self, value: impl Into<Value>) -> Option<bool> {
        self.state.value = value.into();
        if let Some((name, context)) = self.attached() {
            context.set_field_value(name, self.state.value.clone());
        }

        self.validate_on_input.then(|| self.validate_current())
    }

    /// Handles loss of focus: marks the field touched and validates the
    /// current value.
    pub fn on_blur(&mut self) -> bool {
        self.state.touched = true;
        if let Some((name, context)) = self.attached() {
            context.set_field_touched(name, true);
        }
        self.validate_current()
    }

    /// Flips password visibility and returns whether the text is now shown.
    ///
    /// Non-password fields ignore the toggle and always return `false`.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.kind == FieldKind::Password {
            self.state.revealed = !self.state.revealed;
        }
        self.state.revealed
    }

    // ------------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------------

    /// Error to display, resolved from overrides, context and local state.
    #[must_use]
    pub fn display_error(&self) -> ErrorDisplay {
        let context_error = self
            .attached()
            .and_then(|(name, context)| context.error(name));
        resolve_error(&self.overrides, context_error, self.state.local_error.as_deref())
    }

    /// Caption with the required marker applied.
    #[must_use]
    pub fn display_label(&self) -> Option<Cow<'_, str>> {
        self.label
            .as_deref()
            .map(|label| required_label(label, self.required))
    }

    /// `true` when the field or the whole form is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
            || self
                .context
                .as_ref()
                .is_some_and(|context| context.is_disabled())
    }

    /// The input type to render: a revealed password renders as text.
    #[must_use]
    pub fn input_kind(&self) -> FieldKind {
        if self.kind == FieldKind::Password && self.state.revealed {
            FieldKind::Text
        } else {
            self.kind
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Field name.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared field kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the field is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Runtime state.
    #[must_use]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.state.value
    }

    /// Last validation failure.
    #[must_use]
    pub fn local_error(&self) -> Option<&str> {
        self.state.local_error.as_deref()
    }

    /// Whether the field has been blurred.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.state.touched
    }

    /// The composed rule the field runs.
    #[must_use]
    pub fn applied_rule(&self) -> &Compose {
        &self.applied
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// The context, but only for named fields: without a name there is no
    /// key to report under.
    fn attached(&self) -> Option<(&str, &SharedContext)> {
        Some((self.name.as_deref()?, self.context.as_ref()?))
    }
}

impl fmt::Debug for FieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldController")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("rules", &self.rules.len())
            .field("has_context", &self.context.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
