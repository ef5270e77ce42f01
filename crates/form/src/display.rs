//! Display-level resolution of errors and labels

use std::borrow::Cow;

/// What a field should show for its error state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorDisplay {
    /// No error.
    #[default]
    None,
    /// Error with a message to show.
    Message(String),
    /// Error styling without a message.
    Flagged,
}

impl ErrorDisplay {
    /// The message to show, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::None | Self::Flagged => None,
        }
    }

    /// `true` when the field should be styled as erroneous.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Error state pushed onto a field by its parent.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorOverrides {
    /// Explicit message; beats everything else.
    pub error_message: Option<String>,
    /// Alternate explicit message; beats everything but `error_message`.
    pub error: Option<String>,
    /// Error styling without a message, used when nothing else applies.
    pub has_error: bool,
}

/// Picks the error to display.
///
/// First applicable wins: `error_message`, `error`, the context's error for
/// the field, the field's own last validation error, then the `has_error`
/// flag.
#[must_use]
pub fn resolve_error(
    overrides: &ErrorOverrides,
    context_error: Option<String>,
    local_error: Option<&str>,
) -> ErrorDisplay {
    let present = |message: &Option<String>| {
        message.as_deref().filter(|m| !m.is_empty()).map(str::to_owned)
    };

    present(&overrides.error_message)
        .or_else(|| present(&overrides.error))
        .or_else(|| context_error.filter(|m| !m.is_empty()))
        .or_else(|| local_error.filter(|m| !m.is_empty()).map(str::to_owned))
        .map_or_else(
            || {
                if overrides.has_error {
                    ErrorDisplay::Flagged
                } else {
                    ErrorDisplay::None
                }
            },
            ErrorDisplay::Message,
        )
}

/// Marker appended to the label of a required field.
pub const REQUIRED_MARKER: &str = " *";

/// Returns the label to show, with the required marker appended once.
///
/// # Examples
///
/// ```rust
/// use formkit_form::display::required_label;
///
/// assert_eq!(required_label("Email", true), "Email *");
/// assert_eq!(required_label("Email *", true), "Email *");
/// assert_eq!(required_label("Email", false), "Email");
/// ```
#[must_use]
pub fn required_label(label: &str, required: bool) -> Cow<'_, str> {
    if required && !label.ends_with(REQUIRED_MARKER) {
        Cow::Owned(format!("{label}{REQUIRED_MARKER}"))
    } else {
        Cow::Borrowed(label)
    }
}
