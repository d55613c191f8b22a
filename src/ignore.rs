//! Exclusion rules for template trees.
//! Hides well-known entries and anything matched by a template's
//! .mouldignore file. Every rule is checked against an entry's base name.

use crate::constants::{HIDDEN_NAMES, IGNORE_FILE};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Base-name exclusion predicate used when walking a template.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    patterns: GlobSet,
}

impl IgnoreRules {
    /// Rules that only hide the built-in names.
    pub fn defaults() -> Self {
        Self { patterns: GlobSet::empty() }
    }

    /// Builds rules from the .mouldignore file in `template_root`, if present.
    ///
    /// # Notes
    /// - A missing .mouldignore yields the default rules
    /// - Blank lines and lines starting with `#` are skipped
    /// - Invalid glob patterns fail with `Error::ValidationError`
    ///
    /// # Example
    /// ```ignore
    /// # Contents of .mouldignore:
    /// *.log
    /// target
    /// ```
    pub fn from_template<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let ignore_path = template_root.as_ref().join(IGNORE_FILE);
        let Ok(contents) = read_to_string(&ignore_path) else {
            debug!("{} does not exist", ignore_path.display());
            return Ok(Self::defaults());
        };

        let mut builder = GlobSetBuilder::new();
        let mut violations = Vec::new();
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match Glob::new(line) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => violations.push(format!("{line}: {e}")),
            }
        }
        if !violations.is_empty() {
            return Err(Error::ValidationError { path: ignore_path, violations });
        }

        let patterns = builder.build().map_err(|e| Error::ValidationError {
            path: ignore_path.clone(),
            violations: vec![e.to_string()],
        })?;
        Ok(Self { patterns })
    }

    /// Returns true when an entry with this base name must be skipped.
    pub fn is_ignored(&self, name: &str) -> bool {
        HIDDEN_NAMES.contains(&name) || self.patterns.is_match(name)
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_names_are_hidden() {
        let rules = IgnoreRules::defaults();
        assert!(rules.is_ignored(".DS_Store"));
        assert!(rules.is_ignored(".mouldconfig.json"));
        assert!(rules.is_ignored("node_modules"));
        assert!(!rules.is_ignored("index.js"));
    }

    #[test]
    fn test_mouldignore_globs_match_base_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(IGNORE_FILE), "# build output\n\n*.log\ntarget\n").unwrap();

        let rules = IgnoreRules::from_template(dir.path()).unwrap();
        assert!(rules.is_ignored("debug.log"));
        assert!(rules.is_ignored("target"));
        assert!(rules.is_ignored(".mouldignore"));
        assert!(!rules.is_ignored("main.rs"));
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(IGNORE_FILE), "a[\n").unwrap();

        match IgnoreRules::from_template(dir.path()) {
            Err(Error::ValidationError { violations, .. }) => assert_eq!(violations.len(), 1),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }
}
