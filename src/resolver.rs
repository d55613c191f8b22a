//! Template lookup across template sources.

use crate::error::{Error, Result};
use crate::source::TemplateSourceDirectory;
use crate::template::Template;
use log::debug;

/// Finds the template called `name`.
///
/// Sources are searched in order and the first match wins, so a template
/// in an earlier source shadows one with the same name further down.
///
/// # Errors
/// * `Error::NotFound` if no source holds a template with that exact name
/// * `Error::PathError` if a source root cannot be listed
pub fn search_for_template(sources: &[TemplateSourceDirectory], name: &str) -> Result<Template> {
    for source in sources {
        debug!("Searching for '{}' in {}", name, source);
        if let Some(template) = source.list_templates()?.into_iter().find(|t| t.name == name) {
            debug!("Resolved '{}' to {}", name, template.path.display());
            return Ok(template);
        }
    }
    Err(Error::NotFound(format!("template '{name}' in any template source")))
}

/// Every template visible across `sources`, in search order.
pub fn gather_available_templates(sources: &[TemplateSourceDirectory]) -> Result<Vec<Template>> {
    let mut templates = Vec::new();
    for source in sources {
        templates.extend(source.list_templates()?);
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source_with(names: &[&str]) -> (TempDir, TemplateSourceDirectory) {
        let root = TempDir::new().unwrap();
        for name in names {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        let source = TemplateSourceDirectory::new(root.path());
        (root, source)
    }

    #[test]
    fn test_earlier_source_shadows_later() {
        let (first_root, first) = source_with(&["shared", "only-first"]);
        let (_second_root, second) = source_with(&["shared", "only-second"]);
        let sources = [first, second];

        let template = search_for_template(&sources, "shared").unwrap();
        assert_eq!(template.path, first_root.path().join("shared"));

        let template = search_for_template(&sources, "only-second").unwrap();
        assert_eq!(template.name, "only-second");
    }

    #[test]
    fn test_name_match_is_exact() {
        let (_root, source) = source_with(&["Hello-World"]);
        let sources = [source];
        assert!(matches!(search_for_template(&sources, "hello-world"), Err(Error::NotFound(_))));
        assert!(matches!(search_for_template(&sources, "Hello"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_no_sources_is_not_found() {
        assert!(matches!(search_for_template(&[], "anything"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_gather_lists_all_sources() {
        let (_a_root, a) = source_with(&["one", "two"]);
        let (_b_root, b) = source_with(&["two"]);
        let templates = gather_available_templates(&[a, b]).unwrap();
        assert_eq!(templates.len(), 3);
    }
}
