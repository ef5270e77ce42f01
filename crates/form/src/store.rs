//! In-memory form context

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;

use formkit_validator::foundation::Value;

use crate::context::FormContext;

/// A point-in-time copy of a form's aggregate state.
///
/// Maps keep the order in which fields first reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormSnapshot {
    /// Field values.
    pub values: IndexMap<String, Value>,
    /// Current error per invalid field. Valid fields have no entry.
    pub errors: IndexMap<String, String>,
    /// Touched flags.
    pub touched: IndexMap<String, bool>,
    /// Form-wide disabled flag.
    pub disabled: bool,
}

/// Thread-safe in-memory [`FormContext`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use formkit_form::{FormContext, FormStore};
///
/// let store = Arc::new(FormStore::new());
/// store.set_field_error("email", Some("Please enter a valid email address".into()));
/// assert!(!store.is_valid());
///
/// store.set_field_error("email", None);
/// assert!(store.is_valid());
/// ```
#[derive(Debug, Default)]
pub struct FormStore {
    state: RwLock<FormSnapshot>,
}

impl FormStore {
    /// Creates an empty, enabled store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the current state.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        self.state.read().clone()
    }

    /// `true` when no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state.read().errors.is_empty()
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.state.read().errors.len()
    }

    /// Sets the form-wide disabled flag.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.write().disabled = disabled;
        tracing::debug!(target: "formkit::form", disabled, "form disabled flag changed");
    }

    /// Clears values, errors and touched flags. The disabled flag is kept.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.values.clear();
        state.errors.clear();
        state.touched.clear();
        tracing::debug!(target: "formkit::form", "form store reset");
    }
}

impl FormContext for FormStore {
    fn value(&self, name: &str) -> Option<Value> {
        self.state.read().values.get(name).cloned()
    }

    fn error(&self, name: &str) -> Option<String> {
        self.state.read().errors.get(name).cloned()
    }

    fn is_touched(&self, name: &str) -> bool {
        self.state.read().touched.get(name).copied().unwrap_or(false)
    }

    fn is_disabled(&self) -> bool {
        self.state.read().disabled
    }

    fn set_field_value(&self, name: &str, value: Value) {
        self.state.write().values.insert(name.to_owned(), value);
    }

    fn set_field_error(&self, name: &str, error: Option<String>) {
        let mut state = self.state.write();
        match error {
            Some(message) => {
                state.errors.insert(name.to_owned(), message);
            }
            None => {
                state.errors.shift_remove(name);
            }
        }
    }

    fn set_field_touched(&self, name: &str, touched: bool) {
        self.state.write().touched.insert(name.to_owned(), touched);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_values_and_touched() {
        let store = FormStore::new();
        store.set_field_value("name", Value::text("Ada"));
        store.set_field_touched("name", true);

        assert_eq!(store.value("name"), Some(Value::text("Ada")));
        assert!(store.is_touched("name"));
        assert!(!store.is_touched("other"));
        assert_eq!(store.value("other"), None);
    }

    #[test]
    fn test_errors_set_and_clear() {
        let store = FormStore::new();
        store.set_field_error("a", Some("bad".to_owned()));
        store.set_field_error("b", Some("worse".to_owned()));
        assert_eq!(store.error_count(), 2);
        assert_eq!(store.error("a").as_deref(), Some("bad"));

        store.set_field_error("a", None);
        assert_eq!(store.error_count(), 1);
        assert_eq!(store.error("a"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let store = FormStore::new();
        store.set_field_error("a", Some("first".to_owned()));
        store.set_field_error("a", Some("second".to_owned()));
        assert_eq!(store.error("a").as_deref(), Some("second"));
    }

    #[test]
    fn test_snapshot_keeps_first_report_order() {
        let store = FormStore::new();
        store.set_field_value("z", Value::text("1"));
        store.set_field_value("a", Value::text("2"));
        store.set_field_value("z", Value::text("3"));

        let keys: Vec<_> = store.snapshot().values.keys().cloned().collect();
        assert_eq!(keys, vec!["z".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn test_reset_keeps_disabled() {
        let store = FormStore::new();
        store.set_disabled(true);
        store.set_field_value("a", Value::text("x"));
        store.set_field_error("a", Some("bad".to_owned()));
        store.reset();

        let snapshot = store.snapshot();
        assert!(snapshot.values.is_empty());
        assert!(snapshot.errors.is_empty());
        assert!(snapshot.disabled);
    }

    #[test]
    fn test_snapshot_serializes() {
        let store = FormStore::new();
        store.set_field_value("age", Value::Number(42.0));
        store.set_field_error("age", Some("Must not exceed 40".to_owned()));

        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "values": {"age": 42.0},
                "errors": {"age": "Must not exceed 40"},
                "touched": {},
                "disabled": false
            })
        );
    }
}
