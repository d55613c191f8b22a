//! A directory searched for templates.

use crate::error::{Error, Result};
use crate::template::Template;
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};

/// One template source root. Each child directory is a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSourceDirectory {
    pub path: PathBuf,
}

impl TemplateSourceDirectory {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the templates directly under this root, in directory listing
    /// order. Plain files at the top level are not templates and are skipped.
    ///
    /// # Errors
    /// * `Error::PathError` if the root is missing or cannot be read
    pub fn list_templates(&self) -> Result<Vec<Template>> {
        let path_error = |source: std::io::Error| Error::PathError { path: self.path.clone(), source };

        let mut templates = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(path_error)? {
            let entry = entry.map_err(path_error)?;
            let child = entry.path();
            if !child.is_dir() {
                trace!("Skipping non-directory {}", child.display());
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            templates.push(Template::new(name, child));
        }
        Ok(templates)
    }
}

impl std::fmt::Display for TemplateSourceDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_child_directories_only() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        fs::create_dir(root.path().join("beta")).unwrap();
        fs::write(root.path().join("notes.txt"), "stray").unwrap();

        let source = TemplateSourceDirectory::new(root.path());
        let mut names: Vec<String> =
            source.list_templates().unwrap().into_iter().map(|t| t.name).collect();
        names.sort();

        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn test_template_path_is_child_path() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();

        let templates = TemplateSourceDirectory::new(root.path()).list_templates().unwrap();
        assert_eq!(templates, [Template::new("alpha", root.path().join("alpha"))]);
    }

    #[test]
    fn test_missing_root_is_path_error() {
        let root = TempDir::new().unwrap();
        let source = TemplateSourceDirectory::new(root.path().join("missing"));
        assert!(matches!(source.list_templates(), Err(Error::PathError { .. })));
    }
}
