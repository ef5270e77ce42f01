//! # formkit-disclosure
//!
//! Headless state machines for components that show and hide content.
//!
//! - [`Disclosure`]: one open/closed flag with close reasons, for modals,
//!   toggles and popovers
//! - [`Accordion`]: a group of panels where [`ExpandMode::Single`] allows at
//!   most one open panel
//!
//! Neither type renders anything. Each transition reports what changed so the
//! caller can update its view.

pub mod accordion;
pub mod disclosure;

pub use accordion::{Accordion, AccordionError, ExpandMode};
pub use disclosure::{CloseReason, Disclosure, DisclosureEvent};
