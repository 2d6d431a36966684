//! Initialize folio configuration

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::content::Content;

fn write_file(path: &Path, contents: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        println!("  {} {} already exists", "⚠".yellow(), path.display());
        return Ok(false);
    }
    fs::write(path, contents).context(format!("Failed to write {}", path.display()))?;
    println!("  {} Created {}", "✓".green(), path.display());
    Ok(true)
}

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let folio_dir = path.unwrap_or_else(Config::folio_dir);

    println!("{} Initializing folio in {}", "→".blue(), folio_dir.display());
    fs::create_dir_all(&folio_dir).context(format!("Failed to create {}", folio_dir.display()))?;

    let content_path = folio_dir.join("content.yaml");
    let config = Config {
        content: Some(content_path.clone()),
        ..Config::default()
    };

    let config_yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;
    let content_yaml = serde_yaml::to_string(&Content::default()).context("Failed to serialize content")?;

    let wrote_config = write_file(&folio_dir.join("folio.yaml"), &config_yaml, force)?;
    let wrote_content = write_file(&content_path, &content_yaml, force)?;

    if !(wrote_config || wrote_content) {
        println!("  Use {} to overwrite", "--force".cyan());
    }
    Ok(())
}
