//! # formkit-form
//!
//! Headless form-field validation.
//!
//! - [`FieldController`]: one field's value, error and touched state, with
//!   blur/input handling and display resolution
//! - [`FormContext`]: the shared aggregate store fields report into, with
//!   [`FormStore`] as the in-memory implementation
//! - [`validate_all`]: eager validation of a whole form, e.g. on submit
//! - [`FieldConfig`]: fields described as data (TOML, JSON)
//!
//! ```rust
//! use std::sync::Arc;
//! use formkit_form::{FieldController, FieldKind, FormStore, validate_all};
//!
//! let store = Arc::new(FormStore::new());
//! let mut fields = vec![
//!     FieldController::new(FieldKind::Email).name("email").required(true).context(store.clone()),
//!     FieldController::new(FieldKind::Number).name("age").context(store.clone()),
//! ];
//!
//! fields[0].on_input("someone@example.org");
//! fields[1].on_input("forty");
//!
//! assert!(!validate_all(&mut fields));
//! assert_eq!(store.error_count(), 1);
//! ```

pub mod config;
pub mod context;
pub mod display;
pub mod field;
pub mod store;
pub mod submit;

pub use config::{FieldConfig, FieldConfigError, FieldKind};
pub use context::{FormContext, SharedContext};
pub use display::{ErrorDisplay, ErrorOverrides};
pub use field::{FieldController, FieldState};
pub use store::{FormSnapshot, FormStore};
pub use submit::validate_all;
