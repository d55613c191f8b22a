//! Loading the list of template source directories.
//! Sources come either from `template-sources.json` in the Mould home
//! directory or from an explicit comma-separated list.

use crate::constants::{DEFAULT_HOME_DIR, MOULD_HOME_ENV, SOURCES_FILE};
use crate::error::{Error, Result};
use crate::source::TemplateSourceDirectory;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Location of `template-sources.json`: `$MOULD_HOME/template-sources.json`,
/// falling back to `$HOME/mould/template-sources.json`.
pub fn default_sources_file() -> Option<PathBuf> {
    let home = match std::env::var_os(MOULD_HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(std::env::var_os("HOME")?).join(DEFAULT_HOME_DIR),
    };
    Some(home.join(SOURCES_FILE))
}

/// Reads a JSON list of directory paths.
///
/// # Errors
/// * `Error::NotFound` if the file does not exist
/// * `Error::JsonError` if it is not a JSON array of strings
pub fn load_template_sources<P: AsRef<Path>>(
    sources_file: P,
) -> Result<Vec<TemplateSourceDirectory>> {
    let sources_file = sources_file.as_ref();
    if !sources_file.exists() {
        return Err(Error::NotFound(format!(
            "template sources file '{}'",
            sources_file.display()
        )));
    }

    debug!("Loading template sources from {}", sources_file.display());
    let content = std::fs::read_to_string(sources_file)?;
    let paths: Vec<PathBuf> = serde_json::from_str(&content)?;
    Ok(paths.into_iter().map(TemplateSourceDirectory::new).collect())
}

/// Sources listed in the config file, or none with a warning when the file
/// is missing or malformed.
pub fn configured_sources(sources_file: Option<&Path>) -> Vec<TemplateSourceDirectory> {
    let Some(path) = sources_file.map(Path::to_path_buf).or_else(default_sources_file) else {
        warn!("Failed to locate '{SOURCES_FILE}': no home directory");
        return Vec::new();
    };

    match load_template_sources(&path) {
        Ok(sources) => sources,
        Err(e) => {
            warn!(
                "Failed to load directories to search for templates from '{}': {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Parses a `--template-sources` value.
///
/// # Errors
/// * `Error::InvalidSources` if any entry is not an existing directory
pub fn parse_source_list(list: &str) -> Result<Vec<TemplateSourceDirectory>> {
    list.split(',')
        .map(|entry| {
            let path = Path::new(entry);
            if path.is_dir() {
                Ok(TemplateSourceDirectory::new(path))
            } else {
                Err(Error::InvalidSources(entry.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_template_sources() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(SOURCES_FILE);
        fs::write(&file, r#"["/srv/templates", "/home/me/moulds"]"#).unwrap();

        let sources = load_template_sources(&file).unwrap();
        assert_eq!(
            sources,
            [
                TemplateSourceDirectory::new("/srv/templates"),
                TemplateSourceDirectory::new("/home/me/moulds")
            ]
        );
    }

    #[test]
    fn test_malformed_sources_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(SOURCES_FILE);
        fs::write(&file, r#"{"sources": 1}"#).unwrap();

        assert!(matches!(load_template_sources(&file), Err(Error::JsonError(_))));
        assert!(configured_sources(Some(file.as_path())).is_empty());
        assert!(configured_sources(Some(dir.path().join("missing.json").as_path())).is_empty());
    }

    #[test]
    fn test_parse_source_list() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let list = format!("{},{}", a.path().display(), b.path().display());

        let sources = parse_source_list(&list).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].path(), b.path());

        let list = format!("{},{}", a.path().display(), a.path().join("missing").display());
        assert!(matches!(parse_source_list(&list), Err(Error::InvalidSources(_))));
    }
}
