//! Content file loading and validation

use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use super::Content;
use crate::config::Config;

/// Resolve the content for a run: the configured file if any, otherwise
/// the built-in page.
pub fn resolve(config: &Config) -> Result<Content> {
    match &config.content {
        Some(path) => load_from_file(&config.resolve_path(path)),
        None => {
            log::debug!("No content file configured, using built-in content");
            Ok(Content::default())
        }
    }
}

/// Read, parse and validate a YAML content file
pub fn load_from_file(path: &Path) -> Result<Content> {
    let raw = fs::read_to_string(path).context(format!("Failed to read content file {}", path.display()))?;
    let content: Content =
        serde_yaml::from_str(&raw).context(format!("Failed to parse content file {}", path.display()))?;
    validate(&content).context(format!("Invalid content in {}", path.display()))?;

    log::info!("Loaded content from: {}", path.display());
    Ok(content)
}

/// Every section must have something to show
pub fn validate(content: &Content) -> Result<()> {
    if content.profile.name.trim().is_empty() {
        eyre::bail!("profile.name must not be empty");
    }
    if content.about.trim().is_empty() {
        eyre::bail!("about must not be empty");
    }
    if content.skill_groups.is_empty() {
        eyre::bail!("skill_groups must not be empty");
    }
    for group in &content.skill_groups {
        if group.skills.is_empty() {
            eyre::bail!("skill group '{}' has no skills", group.title);
        }
    }
    if content.projects.is_empty() {
        eyre::bail!("projects must not be empty");
    }
    for project in &content.projects {
        if project.tech.is_empty() {
            eyre::bail!("project '{}' has no tech tags", project.name);
        }
    }
    if content.experience.is_empty() {
        eyre::bail!("experience must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_content_is_valid() {
        assert!(validate(&Content::default()).is_ok());
    }

    #[test]
    fn test_resolve_without_file_uses_builtin() {
        let config = Config::default();
        assert_eq!(resolve(&config).unwrap(), Content::default());
    }

    #[test]
    fn test_load_roundtrips_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.yaml");
        fs::write(&path, serde_yaml::to_string(&Content::default()).unwrap()).unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded, Content::default());
    }

    #[test]
    fn test_resolve_reads_configured_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.yaml");
        let mut content = Content::default();
        content.profile.name = "Ada Lovelace".to_string();
        fs::write(&path, serde_yaml::to_string(&content).unwrap()).unwrap();

        let config = Config {
            content: Some(path),
            ..Config::default()
        };
        assert_eq!(resolve(&config).unwrap().profile.name, "Ada Lovelace");
    }

    #[test]
    fn test_relative_content_resolves_next_to_config() {
        let temp = TempDir::new().unwrap();
        let mut content = Content::default();
        content.profile.name = "Alan Turing".to_string();
        fs::write(temp.path().join("content.yaml"), serde_yaml::to_string(&content).unwrap()).unwrap();
        let config_path = temp.path().join("folio.yaml");
        fs::write(&config_path, "content: content.yaml\n").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(resolve(&config).unwrap().profile.name, "Alan Turing");
    }

    #[test]
    fn test_empty_skill_group_rejected() {
        let mut content = Content::default();
        content.skill_groups[1].skills.clear();
        let err = validate(&content).unwrap_err();
        assert!(err.to_string().contains("Professional Skills"));
    }

    #[test]
    fn test_empty_experience_rejected() {
        let mut content = Content::default();
        content.experience.clear();
        assert!(validate(&content).is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_from_file(&PathBuf::from("/nonexistent/content.yaml")).is_err());
    }

    #[test]
    fn test_malformed_yaml_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("content.yaml");
        fs::write(&path, "profile: [not, a, map]\n").unwrap();
        assert!(load_from_file(&path).is_err());
    }
}
