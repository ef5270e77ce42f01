//! The shared form context contract
//!
//! A [`FormContext`] aggregates the state of every field in one logical form:
//! values, errors and touched flags keyed by field name, plus a form-wide
//! disabled flag. Fields push into it; siblings and submit actions read from
//! it. The context is handed to each field explicitly (see
//! [`FieldController::context`](crate::FieldController::context)).

use std::sync::Arc;

use formkit_validator::foundation::Value;

/// Shared handle to a form context.
pub type SharedContext = Arc<dyn FormContext + Send + Sync>;

/// Aggregate form state that fields read from and write into.
///
/// Methods take `&self`: implementations use interior mutability so one
/// handle can be shared by every field of a form. Writes for the same field
/// name are last-write-wins.
#[cfg_attr(test, mockall::automock)]
pub trait FormContext {
    /// Current value of a field.
    fn value(&self, name: &str) -> Option<Value>;

    /// Current error message of a field.
    fn error(&self, name: &str) -> Option<String>;

    /// Whether a field has lost focus at least once.
    fn is_touched(&self, name: &str) -> bool;

    /// Form-wide disabled flag.
    fn is_disabled(&self) -> bool;

    /// Records a field's value.
    fn set_field_value(&self, name: &str, value: Value);

    /// Records (`Some`) or clears (`None`) a field's error.
    fn set_field_error(&self, name: &str, error: Option<String>);

    /// Records a field's touched flag.
    fn set_field_touched(&self, name: &str, touched: bool);
}
