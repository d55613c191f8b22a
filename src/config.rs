//! Configuration handling for Mould templates.
//! A template may carry a `.mouldconfig.json` declaring the inputs it
//! expects and the substitutions applied to its files on export.

use crate::constants::CONFIG_FILE;
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::path::Path;

/// Kinds of value an input may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum InputType {
    #[serde(rename = "text")]
    Text,
}

/// One value the template expects from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InputDefinition {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(rename = "type")]
    pub input_type: InputType,
}

/// A `[pattern, input_id]` pair. Every match of `pattern` is replaced by
/// the value supplied for `input_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Substitution {
    pub pattern: String,
    pub input_id: String,
}

impl Substitution {
    pub fn new<P: Into<String>, I: Into<String>>(pattern: P, input_id: I) -> Self {
        Self { pattern: pattern.into(), input_id: input_id.into() }
    }
}

impl From<(String, String)> for Substitution {
    fn from((pattern, input_id): (String, String)) -> Self {
        Self { pattern, input_id }
    }
}

impl From<Substitution> for (String, String) {
    fn from(substitution: Substitution) -> Self {
        (substitution.pattern, substitution.input_id)
    }
}

/// Parsed `.mouldconfig.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Editor hint pointing at the schema; ignored by Mould.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<InputDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Vec<Substitution>>,
}

impl TemplateConfig {
    /// Declared inputs marked as required, in declaration order.
    pub fn required_inputs(&self) -> impl Iterator<Item = &InputDefinition> {
        self.inputs.iter().flatten().filter(|input| input.required)
    }

    pub fn substitutions(&self) -> &[Substitution] {
        self.substitutions.as_deref().unwrap_or_default()
    }
}

/// Configuration used by templates without a `.mouldconfig.json`:
/// no inputs and no substitutions.
pub fn default_config() -> TemplateConfig {
    TemplateConfig::default()
}

/// Closed JSON schema every `.mouldconfig.json` must satisfy.
pub fn config_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "$schema": { "type": "string" },
            "inputs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["id", "label", "required", "type"],
                    "properties": {
                        "id": { "type": "string" },
                        "label": { "type": "string" },
                        "description": { "type": "string" },
                        "required": { "type": "boolean" },
                        "type": { "enum": ["text"] }
                    }
                }
            },
            "substitutions": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "array",
                    "minItems": 2,
                    "maxItems": 2,
                    "items": { "type": "string" }
                }
            }
        }
    })
}

/// Returns true if a config file exists in the template directory.
pub fn has_config<P: AsRef<Path>>(template_dir: P) -> bool {
    template_dir.as_ref().join(CONFIG_FILE).exists()
}

/// Loads and validates the config file of a template directory.
///
/// # Arguments
/// * `template_dir` - Directory containing `.mouldconfig.json`
///
/// # Returns
/// * `Result<TemplateConfig>` - The validated configuration
///
/// # Errors
/// * `Error::NotFound` if the template has no config file
/// * `Error::ValidationError` with every violation if the document is invalid
pub fn load_config<P: AsRef<Path>>(template_dir: P) -> Result<TemplateConfig> {
    let config_path = template_dir.as_ref().join(CONFIG_FILE);
    if !config_path.exists() {
        return Err(Error::NotFound(format!(
            "configuration file '{}'",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;

    parse_config(&content).map_err(|violations| Error::ValidationError {
        path: config_path,
        violations,
    })
}

/// Parses and validates config file content.
/// On failure returns the full list of violations found.
pub fn parse_config(content: &str) -> std::result::Result<TemplateConfig, Vec<String>> {
    let document: serde_json::Value =
        serde_json::from_str(content).map_err(|e| vec![format!("not valid JSON: {e}")])?;

    let validator =
        jsonschema::validator_for(&config_schema()).map_err(|e| vec![e.to_string()])?;
    let violations: Vec<String> = validator
        .iter_errors(&document)
        .map(|e| {
            let location = e.instance_path().to_string();
            let location = if location.is_empty() { "/".to_string() } else { location };
            format!("{location}: {e}")
        })
        .collect();
    if !violations.is_empty() {
        return Err(violations);
    }

    let config: TemplateConfig =
        serde_json::from_value(document).map_err(|e| vec![e.to_string()])?;

    let violations = semantic_violations(&config);
    if !violations.is_empty() {
        return Err(violations);
    }

    debug!("Loaded configuration: {config:?}");
    Ok(config)
}

// Checks the schema cannot express: unique ids and compilable patterns.
fn semantic_violations(config: &TemplateConfig) -> Vec<String> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for input in config.inputs.iter().flatten() {
        if !seen.insert(input.id.as_str()) {
            violations.push(format!("duplicate input id '{}'", input.id));
        }
    }

    for substitution in config.substitutions() {
        if let Err(e) = Regex::new(&substitution.pattern) {
            violations.push(format!("invalid pattern '{}': {e}", substitution.pattern));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config = parse_config(
            r#"{
                "$schema": "./mouldconfig.schema.json",
                "inputs": [
                    {"id": "project_name", "label": "Project name", "required": true, "type": "text"},
                    {"id": "org", "label": "Org", "description": "npm scope", "required": false, "type": "text"}
                ],
                "substitutions": [["__PROJECT_NAME__", "project_name"], ["__ORG__", "org"]]
            }"#,
        )
        .unwrap();

        let inputs = config.inputs.as_ref().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].description.as_deref(), Some("npm scope"));
        assert_eq!(inputs[0].input_type, InputType::Text);
        assert_eq!(
            config.substitutions(),
            [Substitution::new("__PROJECT_NAME__", "project_name"), Substitution::new("__ORG__", "org")]
        );
        assert_eq!(config.required_inputs().count(), 1);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("{}").unwrap(), default_config());
    }

    #[test]
    fn test_unknown_top_level_field_is_rejected() {
        let violations = parse_config(r#"{"inputs": [], "extra": 1}"#).unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_every_violation_is_reported() {
        let violations = parse_config(
            r#"{"inputs": [{"id": "a", "label": "A", "required": true, "type": "number", "x": 1}]}"#,
        )
        .unwrap_err();
        assert!(violations.len() >= 2, "{violations:?}");
    }

    #[test]
    fn test_violations_name_their_location() {
        let violations = parse_config(
            r#"{
                "inputs": [
                    {"id": "a", "label": "A", "required": "yes", "type": "text"},
                    {"id": "b", "label": "B", "required": true, "type": "text"}
                ],
                "substitutions": [["x", 3]],
                "extra": 1
            }"#,
        )
        .unwrap_err();

        assert_eq!(violations.len(), 3, "{violations:?}");
        assert!(violations.iter().any(|v| v.starts_with("/inputs/0/required: ")), "{violations:?}");
        assert!(violations.iter().any(|v| v.starts_with("/substitutions/0/1: ")), "{violations:?}");
        assert!(violations.iter().any(|v| v.starts_with("/: ")), "{violations:?}");
    }

    #[test]
    fn test_missing_required_subfield_is_rejected() {
        assert!(parse_config(r#"{"inputs": [{"id": "a", "label": "A", "type": "text"}]}"#).is_err());
    }

    #[test]
    fn test_empty_substitutions_are_rejected() {
        assert!(parse_config(r#"{"substitutions": []}"#).is_err());
        assert!(parse_config(r#"{"substitutions": [["only-pattern"]]}"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_and_bad_patterns_are_rejected() {
        let violations = parse_config(
            r#"{
                "inputs": [
                    {"id": "a", "label": "A", "required": true, "type": "text"},
                    {"id": "a", "label": "B", "required": true, "type": "text"}
                ],
                "substitutions": [["(unclosed", "a"]]
            }"#,
        )
        .unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_invalid_json_is_a_violation() {
        let violations = parse_config("{ not json").unwrap_err();
        assert!(violations[0].starts_with("not valid JSON"));
    }
}
