//! Coordinated expand/collapse across a group of panels

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Errors raised by [`Accordion`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    /// No panel is registered under this id.
    #[error("unknown panel `{0}`")]
    UnknownPanel(String),
    /// A panel with this id is already registered.
    #[error("panel `{0}` is already registered")]
    DuplicatePanel(String),
}

/// How many panels may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandMode {
    /// At most one panel open; opening one closes the others.
    #[default]
    Single,
    /// Any number of panels open.
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Panel {
    open: bool,
    // Sequence number of the last open, for recency.
    opened_at: u64,
}

/// A group of panels sharing an [`ExpandMode`].
///
/// ```rust
/// use formkit_disclosure::{Accordion, ExpandMode};
///
/// let mut faq = Accordion::new();
/// faq.add_panel("shipping", true)?;
/// faq.add_panel("returns", false)?;
///
/// faq.toggle("returns")?;
/// assert_eq!(faq.open_panels().collect::<Vec<_>>(), ["returns"]);
///
/// faq.set_mode(ExpandMode::Multiple);
/// faq.toggle("shipping")?;
/// assert_eq!(faq.open_panels().count(), 2);
/// # Ok::<(), formkit_disclosure::AccordionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    mode: ExpandMode,
    panels: IndexMap<String, Panel>,
    sequence: u64,
}

impl Accordion {
    /// Creates an empty accordion in [`ExpandMode::Single`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_mode(mut self, mode: ExpandMode) -> Self {
        self.mode = mode;
        self
    }

    /// The current mode.
    pub const fn mode(&self) -> ExpandMode {
        self.mode
    }

    /// Registers a panel. A checked panel opens immediately.
    pub fn add_panel(&mut self, id: impl Into<String>, checked: bool) -> Result<(), AccordionError> {
        let id = id.into();
        if self.panels.contains_key(&id) {
            return Err(AccordionError::DuplicatePanel(id));
        }
        self.panels.insert(id.clone(), Panel { open: false, opened_at: 0 });
        if checked {
            self.open_panel(&id);
        }
        Ok(())
    }

    /// Opens a closed panel or closes an open one. Returns whether the
    /// panel is open afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool, AccordionError> {
        let open = self
            .panels
            .get(id)
            .map(|panel| panel.open)
            .ok_or_else(|| AccordionError::UnknownPanel(id.to_owned()))?;

        if open {
            if let Some(panel) = self.panels.get_mut(id) {
                panel.open = false;
            }
            tracing::debug!(target: "formkit::disclosure", panel = id, "panel closed");
            Ok(false)
        } else {
            self.open_panel(id);
            Ok(true)
        }
    }

    /// Changes the mode. Going to [`ExpandMode::Single`] keeps only the most
    /// recently opened panel open.
    pub fn set_mode(&mut self, mode: ExpandMode) {
        self.mode = mode;
        if mode == ExpandMode::Single {
            let keep = self
                .panels
                .iter()
                .filter(|(_, panel)| panel.open)
                .max_by_key(|(_, panel)| panel.opened_at)
                .map(|(id, _)| id.clone());
            self.close_all_except(keep.as_deref());
        }
        tracing::debug!(target: "formkit::disclosure", ?mode, "accordion mode changed");
    }

    /// Whether the panel is open. Unknown ids are closed.
    pub fn is_open(&self, id: &str) -> bool {
        self.panels.get(id).is_some_and(|panel| panel.open)
    }

    /// Ids of open panels, in registration order.
    pub fn open_panels(&self) -> impl Iterator<Item = &str> {
        self.panels
            .iter()
            .filter(|(_, panel)| panel.open)
            .map(|(id, _)| id.as_str())
    }

    /// Ids of every panel, in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    fn open_panel(&mut self, id: &str) {
        if self.mode == ExpandMode::Single {
            self.close_all_except(Some(id));
        }
        self.sequence += 1;
        let sequence = self.sequence;
        if let Some(panel) = self.panels.get_mut(id) {
            panel.open = true;
            panel.opened_at = sequence;
        }
        tracing::debug!(target: "formkit::disclosure", panel = id, "panel opened");
    }

    fn close_all_except(&mut self, keep: Option<&str>) {
        for (id, panel) in &mut self.panels {
            if Some(id.as_str()) != keep {
                panel.open = false;
            }
        }
    }
}
