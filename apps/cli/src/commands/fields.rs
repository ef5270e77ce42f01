//! `formkit fields`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use formkit_form::FormStore;

use crate::definition::{FormDefinition, field_key};

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Form definition file
    #[arg(long, short, value_name = "FILE", env = "FORMKIT_FORM")]
    pub form: PathBuf,
}

/// Prints one line per field: key, label, kind and disabled state.
pub fn execute(args: &FieldsArgs) -> Result<bool> {
    let definition = FormDefinition::load(&args.form)?;
    let store = Arc::new(FormStore::new());
    let fields = definition.controllers(&store)?;

    if let Some(title) = &definition.title {
        println!("{title}");
    }
    for (index, field) in fields.iter().enumerate() {
        let key = field_key(field, index);
        let label = field.display_label().map_or_else(|| key.clone(), |l| l.into_owned());
        let disabled = if field.is_disabled() { " disabled" } else { "" };
        println!("{key}\t{label}\t{}{disabled}", field.kind());
    }
    Ok(true)
}
