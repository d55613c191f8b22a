//! Writes a walked template tree to its destination.

use crate::config::TemplateConfig;
use crate::error::{Error, Result};
use crate::inputs::InputValues;
use crate::substitution::SubstitutionEngine;
use crate::walker::TemplateEntry;
use log::debug;
use std::fs;
use std::path::Path;

/// Counts of what an export created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub directories: usize,
    pub files: usize,
}

/// Materializes a template listing under a fresh output directory.
pub struct TemplateExporter<'a> {
    config: &'a TemplateConfig,
    files: &'a [TemplateEntry],
    output_path: &'a Path,
    input_values: &'a InputValues,
}

impl<'a> TemplateExporter<'a> {
    pub fn new(
        config: &'a TemplateConfig,
        files: &'a [TemplateEntry],
        output_path: &'a Path,
        input_values: &'a InputValues,
    ) -> Self {
        Self { config, files, output_path, input_values }
    }

    /// Runs the export.
    ///
    /// # Flow
    /// 1. Fails with `Error::AlreadyExists` if the output path exists
    /// 2. Creates the output directory
    /// 3. Creates each directory entry and writes each file entry, in
    ///    listing order, with substitutions applied to file text
    ///
    /// # Notes
    /// - Files that are not UTF-8 text are copied byte for byte
    /// - Nothing is rolled back if a write fails halfway through
    pub fn export(&self) -> Result<ExportSummary> {
        // symlink_metadata so a dangling link still counts as taken
        if fs::symlink_metadata(self.output_path).is_ok() {
            return Err(Error::AlreadyExists { path: self.output_path.to_path_buf() });
        }

        let engine = SubstitutionEngine::new(self.config.substitutions(), self.input_values)?;
        if engine.is_identity() {
            debug!("No substitutions apply, copying files as they are");
        }

        create_dir_all(self.output_path)?;
        debug!("Created output directory {}", self.output_path.display());

        let mut summary = ExportSummary::default();
        for entry in self.files {
            let target = entry.target_under(self.output_path);
            match entry {
                TemplateEntry::Directory(_) => {
                    debug!("Creating directory: {}", target.display());
                    create_dir(&target)?;
                    summary.directories += 1;
                }
                TemplateEntry::File(file) => match file.read_content()? {
                    Some(content) => {
                        debug!("Writing file: {}", target.display());
                        write_file(&target, &engine.apply(&content))?;
                        summary.files += 1;
                    }
                    None => {
                        debug!("Copying '{}' unchanged, not UTF-8 text", entry.name());
                        copy_file(&file.absolute_path, &target)?;
                        summary.files += 1;
                    }
                },
            }
        }

        Ok(summary)
    }
}

fn path_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::PathError { path: path.to_path_buf(), source }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(path_error(path))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(path_error(path))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(path_error(path))
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).map(|_| ()).map_err(path_error(dest))
}
