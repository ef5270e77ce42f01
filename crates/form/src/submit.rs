//! Form-level eager validation

use crate::field::FieldController;

/// Runs blur semantics on every field and reports whether all passed.
///
/// Every field is visited even after a failure, so each one ends up touched
/// and showing its own error.
///
/// # Examples
///
/// ```rust
/// use formkit_form::{FieldController, FieldKind, validate_all};
///
/// let mut fields = vec![
///     FieldController::new(FieldKind::Text).required(true),
///     FieldController::new(FieldKind::Email).initial_value("nope"),
/// ];
///
/// assert!(!validate_all(&mut fields));
/// assert!(fields.iter().all(|f| f.is_touched() && f.local_error().is_some()));
/// ```
pub fn validate_all<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a mut FieldController>,
{
    let (total, failed) = fields
        .into_iter()
        .fold((0usize, 0usize), |(total, failed), field| {
            let valid = field.on_blur();
            (total + 1, failed + usize::from(!valid))
        });

    tracing::debug!(target: "formkit::form", total, failed, "validated form");
    failed == 0
}
