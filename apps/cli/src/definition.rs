//! Form definitions loaded from disk

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml};
use serde::Deserialize;

use formkit_form::{FieldConfig, FieldController, FormStore};

/// Prefix for environment overrides of top-level keys (`FORMKIT_FORM_TITLE`).
pub const ENV_PREFIX: &str = "FORMKIT_FORM_";

/// A form file: an optional title and its fields in order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormDefinition {
    pub title: Option<String>,
    pub fields: Vec<FieldConfig>,
}

impl FormDefinition {
    /// Loads a definition, picking the format from the file extension.
    ///
    /// `.json` files are read as JSON, everything else as TOML. Variables
    /// starting with [`ENV_PREFIX`] are layered on top.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("form file not found: {}", path.display());
        }

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let figment = if is_json {
            Figment::from(Json::file(path))
        } else {
            Figment::from(Toml::file(path))
        };

        let definition: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .with_context(|| format!("failed to load form from {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            fields = definition.fields.len(),
            "form definition loaded"
        );
        Ok(definition)
    }

    /// Builds one controller per field, all attached to `store`.
    pub fn controllers(&self, store: &Arc<FormStore>) -> Result<Vec<FieldController>> {
        self.fields
            .iter()
            .map(|config| {
                let field = FieldController::from_config(config)?;
                Ok(field.context(store.clone()))
            })
            .collect()
    }
}

/// A name for a field in output: its `name`, or its position.
pub fn field_key(field: &FieldController, index: usize) -> String {
    field
        .field_name()
        .map_or_else(|| format!("#{}", index + 1), str::to_owned)
}
