//! Recursive listing of a template tree.
//! Entries come out in pre-order: a kept directory is immediately followed
//! by its own children. Siblings keep the order of the underlying listing.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub name: String,
    /// Path segments from the template root to this file.
    pub relative_path: Vec<String>,
    pub absolute_path: PathBuf,
}

impl TemplateFile {
    /// Reads the file as UTF-8 text. Not cached, every call hits the disk.
    /// Returns `None` when the file is not valid UTF-8.
    pub fn read_content(&self) -> Result<Option<String>> {
        let bytes = fs::read(&self.absolute_path).map_err(|source| Error::PathError {
            path: self.absolute_path.clone(),
            source,
        })?;
        Ok(String::from_utf8(bytes).ok())
    }
}

/// A directory inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDirectory {
    pub name: String,
    pub relative_path: Vec<String>,
    pub absolute_path: PathBuf,
}

/// One item produced by [`walk_template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry {
    File(TemplateFile),
    Directory(TemplateDirectory),
}

impl TemplateEntry {
    pub fn name(&self) -> &str {
        match self {
            TemplateEntry::File(file) => &file.name,
            TemplateEntry::Directory(dir) => &dir.name,
        }
    }

    pub fn relative_path(&self) -> &[String] {
        match self {
            TemplateEntry::File(file) => &file.relative_path,
            TemplateEntry::Directory(dir) => &dir.relative_path,
        }
    }

    /// Joins the relative segments onto `base`.
    pub fn target_under<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        self.relative_path()
            .iter()
            .fold(base.as_ref().to_path_buf(), |path, segment| path.join(segment))
    }
}

/// Lists every file and directory below `root`.
///
/// # Arguments
/// * `root` - Template directory to walk
/// * `is_ignored` - Predicate over an entry's base name; a matching directory
///   is skipped together with its whole subtree
///
/// # Errors
/// * `Error::NotFound` if `root` is missing or not a directory
/// * `Error::PathError` if a directory cannot be read during the walk
pub fn walk_template<P, F>(root: P, is_ignored: F) -> Result<Vec<TemplateEntry>>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool,
{
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotFound(format!(
            "template directory '{}'",
            root.display()
        )));
    }

    debug!("Walking template tree at {}", root.display());

    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_ignored(&entry.file_name().to_string_lossy()));

    let mut entries = Vec::new();
    for dir_entry in walker {
        let dir_entry = dir_entry.map_err(|e| Error::PathError {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: io::Error::from(e),
        })?;

        let absolute_path = dir_entry.path().to_path_buf();
        let relative_path = absolute_path
            .strip_prefix(root)
            .map_err(|e| Error::PathError {
                path: absolute_path.clone(),
                source: io::Error::other(e),
            })?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        let entry = if dir_entry.file_type().is_dir() {
            TemplateEntry::Directory(TemplateDirectory { name, relative_path, absolute_path })
        } else {
            TemplateEntry::File(TemplateFile { name, relative_path, absolute_path })
        };
        entries.push(entry);
    }

    debug!("Found {} entries in {}", entries.len(), root.display());
    Ok(entries)
}
