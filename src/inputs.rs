//! Template input values supplied on the command line.

use crate::config::TemplateConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Input id to value.
pub type InputValues = IndexMap<String, String>;

/// Splits a `key=value` token.
///
/// # Errors
/// * `Error::MalformedInput` unless the token has exactly one `=` with
///   non-empty text on both sides
pub fn parse_input(token: &str) -> Result<(String, String)> {
    let mut parts = token.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(Error::MalformedInput(token.to_string())),
    }
}

/// Parses every `--input` token. A repeated key keeps its last value.
pub fn parse_inputs<S: AsRef<str>>(tokens: &[S]) -> Result<InputValues> {
    tokens.iter().map(|token| parse_input(token.as_ref())).collect()
}

/// Checks that every required input declared by `config` has a value.
///
/// # Errors
/// * `Error::MissingInputs` listing all missing ids at once
pub fn check_required_inputs(config: &TemplateConfig, values: &InputValues) -> Result<()> {
    let missing: Vec<String> = config
        .required_inputs()
        .filter(|input| !values.contains_key(&input.id))
        .map(|input| input.id.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        for id in &missing {
            log::error!("Missing input '{id}' for mould template!");
        }
        Err(Error::MissingInputs { ids: missing })
    }
}
