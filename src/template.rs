//! A named template directory found in a template source.

use crate::config::{self, TemplateConfig};
use crate::error::Result;
use crate::exporter::{ExportSummary, TemplateExporter};
use crate::ignore::IgnoreRules;
use crate::inputs::InputValues;
use crate::walker::{walk_template, TemplateEntry};
use log::debug;
use std::path::{Path, PathBuf};

/// A template: a directory whose base name is its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
}

impl Template {
    pub fn new<N: Into<String>, P: Into<PathBuf>>(name: N, path: P) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    /// Returns true if the template ships a `.mouldconfig.json`.
    pub fn has_config(&self) -> bool {
        config::has_config(&self.path)
    }

    /// Loads the template's config. Fails with `Error::NotFound` when there is none.
    pub fn load_config(&self) -> Result<TemplateConfig> {
        config::load_config(&self.path)
    }

    /// The template's config, or the default one if it has no config file.
    pub fn config(&self) -> Result<TemplateConfig> {
        if self.has_config() {
            self.load_config()
        } else {
            Ok(config::default_config())
        }
    }

    /// Lists the files and directories to export, skipping hidden names.
    pub fn list_files(&self) -> Result<Vec<TemplateEntry>> {
        let rules = IgnoreRules::from_template(&self.path)?;
        walk_template(&self.path, |name| rules.is_ignored(name))
    }

    /// Exports the template to `output_path` using a config the caller has
    /// already loaded. Required inputs are expected to have been checked.
    pub fn export<P: AsRef<Path>>(
        &self,
        config: &TemplateConfig,
        output_path: P,
        input_values: &InputValues,
    ) -> Result<ExportSummary> {
        let output_path = output_path.as_ref();
        debug!(
            "Template '{}' exporting to '{}' with values: {:?}",
            self.name,
            output_path.display(),
            input_values
        );

        let files = self.list_files()?;
        let summary = TemplateExporter::new(config, &files, output_path, input_values).export()?;

        debug!("Template '{}' exported to '{}'", self.name, output_path.display());
        Ok(summary)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.name, self.path.display())
    }
}
