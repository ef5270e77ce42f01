//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod check;
pub mod fields;

/// Check form input against a declarative form definition
#[derive(Debug, Parser)]
#[command(name = "formkit")]
#[command(version, about = "Check form input against a declarative form definition")]
#[command(long_about = r#"
Loads a form definition (TOML, or JSON for .json files) and runs the same
validation a rendered form would run on blur.

EXIT CODES:
  0 - Every field is valid
  1 - At least one field is invalid
  2 - The form could not be loaded or the arguments are wrong
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (overrides FORMKIT_LOG and RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate values against every field of a form
    Check(check::CheckArgs),

    /// List the fields of a form
    Fields(fields::FieldsArgs),
}
