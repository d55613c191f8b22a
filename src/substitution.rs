//! Ordered pattern substitution over file text.

use crate::config::Substitution;
use crate::error::{Error, Result};
use crate::inputs::InputValues;
use log::trace;
use regex::{NoExpand, Regex};

/// A compiled substitution rule whose input has a usable value.
#[derive(Debug, Clone)]
struct ActiveRule {
    pattern: Regex,
    replacement: String,
}

/// Applies substitution rules, in order, to text.
///
/// Rules whose input is absent or empty are dropped when the engine is
/// built, so they leave text untouched.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionEngine {
    rules: Vec<ActiveRule>,
}

impl SubstitutionEngine {
    /// Compiles `substitutions` against the supplied input values.
    ///
    /// # Errors
    /// * `Error::InvalidPattern` if a pattern is not a valid regular expression
    pub fn new(substitutions: &[Substitution], input_values: &InputValues) -> Result<Self> {
        let mut rules = Vec::with_capacity(substitutions.len());
        for substitution in substitutions {
            let Some(value) = input_values.get(&substitution.input_id).filter(|v| !v.is_empty())
            else {
                trace!(
                    "No value for '{}', pattern '{}' left as is",
                    substitution.input_id,
                    substitution.pattern
                );
                continue;
            };
            let pattern = Regex::new(&substitution.pattern).map_err(|source| {
                Error::InvalidPattern { pattern: substitution.pattern.clone(), source }
            })?;
            rules.push(ActiveRule { pattern, replacement: value.clone() });
        }
        Ok(Self { rules })
    }

    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replaces every match of each rule, feeding each rule the output
    /// of the previous one. Replacement values are inserted literally.
    pub fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |current, rule| {
            rule.pattern.replace_all(&current, NoExpand(rule.replacement.as_str())).into_owned()
        })
    }
}
