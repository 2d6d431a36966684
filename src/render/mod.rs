//! Page renderers
//!
//! - `html`: self-contained HTML document with scroll reveal
//! - `preview`: colored terminal rendition

pub mod html;
pub mod preview;

use eyre::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `contents` to `path` via a temp file in the same directory, so
/// readers never see a half-written page.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).context(format!("Failed to create {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).context("Failed to create temp file")?;
    tmp.write_all(contents.as_bytes()).context("Failed to write page")?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .context(format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site").join("index.html");
        write_atomic(&path, "<p>hi</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }
}
