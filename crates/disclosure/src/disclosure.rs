//! Open/close state for modal and toggle-like components

use serde::{Deserialize, Serialize};

/// Why a disclosure was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Closed without a decision (close button, escape, `close()`).
    #[default]
    Dismissed,
    /// The cancel action was taken.
    Cancelled,
    /// The confirm action was taken.
    Confirmed,
    /// A click landed outside the content.
    Backdrop,
}

/// A state change reported by a [`Disclosure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "reason", rename_all = "snake_case")]
pub enum DisclosureEvent {
    /// Went from closed to open.
    Opened,
    /// Went from open to closed.
    Closed(CloseReason),
}

/// Headless open/closed state.
///
/// Transitions return an event only when the state actually changes, so a
/// caller can forward the return value to whatever listens for
/// `update:open`-style notifications.
///
/// ```rust
/// use formkit_disclosure::{CloseReason, Disclosure, DisclosureEvent};
///
/// let mut modal = Disclosure::new(false);
/// assert_eq!(modal.open(), Some(DisclosureEvent::Opened));
/// assert_eq!(modal.open(), None);
/// assert_eq!(
///     modal.close_with(CloseReason::Confirmed),
///     Some(DisclosureEvent::Closed(CloseReason::Confirmed))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
    close_on_backdrop: bool,
    last_close: Option<CloseReason>,
}

impl Disclosure {
    /// Creates a disclosure in the given state.
    pub const fn new(open: bool) -> Self {
        Self {
            open,
            close_on_backdrop: false,
            last_close: None,
        }
    }

    /// Allow clicks outside the content to close it.
    #[must_use = "builder methods must be chained or built"]
    pub const fn close_on_backdrop(mut self, enabled: bool) -> Self {
        self.close_on_backdrop = enabled;
        self
    }

    /// Whether backdrop clicks close this disclosure.
    pub const fn closes_on_backdrop(&self) -> bool {
        self.close_on_backdrop
    }

    /// Whether the disclosure is open.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The reason given for the most recent close, if it has ever closed.
    pub const fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Opens the disclosure.
    pub fn open(&mut self) -> Option<DisclosureEvent> {
        if self.open {
            return None;
        }
        self.open = true;
        tracing::debug!(target: "formkit::disclosure", "opened");
        Some(DisclosureEvent::Opened)
    }

    /// Closes the disclosure as [`CloseReason::Dismissed`].
    pub fn close(&mut self) -> Option<DisclosureEvent> {
        self.close_with(CloseReason::Dismissed)
    }

    /// Closes the disclosure, recording why.
    ///
    /// A [`CloseReason::Backdrop`] close is ignored unless
    /// [`close_on_backdrop`](Self::close_on_backdrop) was enabled.
    pub fn close_with(&mut self, reason: CloseReason) -> Option<DisclosureEvent> {
        if !self.open {
            return None;
        }
        if reason == CloseReason::Backdrop && !self.close_on_backdrop {
            tracing::trace!(target: "formkit::disclosure", "backdrop click ignored");
            return None;
        }
        self.open = false;
        self.last_close = Some(reason);
        tracing::debug!(target: "formkit::disclosure", ?reason, "closed");
        Some(DisclosureEvent::Closed(reason))
    }

    /// Flips the state. Closing this way counts as dismissed.
    pub fn toggle(&mut self) -> Option<DisclosureEvent> {
        if self.open { self.close() } else { self.open() }
    }

    /// Forces the state, as when a parent binding changes.
    pub fn set_open(&mut self, open: bool) -> Option<DisclosureEvent> {
        if open { self.open() } else { self.close() }
    }
}
