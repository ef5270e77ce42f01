//! `formkit check`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use serde::Serialize;

use formkit_form::{FormStore, validate_all};

use crate::definition::{FormDefinition, field_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Form definition file
    #[arg(long, short, value_name = "FILE", env = "FORMKIT_FORM")]
    pub form: PathBuf,

    /// Field value as NAME=VALUE; repeatable
    #[arg(long = "value", short = 'v', value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_owned(), value.to_owned()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

#[derive(Debug, Serialize)]
struct FieldReport {
    field: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    valid: bool,
    fields: Vec<FieldReport>,
}

/// Returns whether every field is valid.
pub fn execute(args: &CheckArgs) -> Result<bool> {
    let definition = FormDefinition::load(&args.form)?;
    let store = Arc::new(FormStore::new());
    let mut fields = definition.controllers(&store)?;

    for (name, value) in &args.values {
        let Some(field) = fields
            .iter_mut()
            .find(|field| field.field_name() == Some(name.as_str()))
        else {
            bail!("no field named `{name}` in {}", args.form.display());
        };
        field.on_input(value.as_str());
    }

    let valid = validate_all(&mut fields);
    tracing::info!(valid, errors = store.error_count(), "form checked");

    let report = Report {
        title: definition.title,
        valid,
        fields: fields
            .iter()
            .enumerate()
            .map(|(index, field)| FieldReport {
                field: field_key(field, index),
                valid: field.local_error().is_none(),
                error: field.display_error().message().map(str::to_owned),
            })
            .collect(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for field in &report.fields {
                match &field.error {
                    Some(error) => println!("FAIL {}: {error}", field.field),
                    None => println!("ok   {}", field.field),
                }
            }
        }
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("email=a@b.com").unwrap(),
            ("email".to_owned(), "a@b.com".to_owned())
        );
        assert_eq!(
            parse_assignment("query=a=b").unwrap(),
            ("query".to_owned(), "a=b".to_owned())
        );
        assert_eq!(parse_assignment("name=").unwrap(), ("name".to_owned(), String::new()));
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }
}
