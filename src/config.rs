use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log level for the file logger
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Main folio configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Default path for `folio render`
    pub output: PathBuf,
    /// Optional content file; the built-in page is used when absent
    pub content: Option<PathBuf>,
    pub reveal: RevealConfig,
    /// File this config was loaded from; relative paths inside it resolve
    /// against its directory
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Timing and trigger settings for scroll reveal
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Emit reveal transitions at all; when false every block is rendered visible
    pub enabled: bool,
    /// Fraction of a block that must be inside the viewport to trigger
    pub threshold: f64,
    /// Block transition duration
    pub duration_ms: u64,
    /// Vertical offset of a hidden block, in pixels
    pub offset_px: u32,
    /// Delay between consecutive children of a staggered list
    pub stagger_ms: u64,
    /// Transition duration of each staggered child
    pub item_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output: PathBuf::from("index.html"),
            content: None,
            reveal: RevealConfig::default(),
            source: None,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.1,
            duration_ms: 600,
            offset_px: 20,
            stagger_ms: 100,
            item_duration_ms: 500,
        }
    }
}

impl RevealConfig {
    /// Reject settings a browser observer would refuse
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            eyre::bail!("reveal.threshold must be between 0 and 1, got {}", self.threshold);
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Failed to load config from FOLIO_CONFIG: {}", e),
                }
            }
        }

        let candidates = [
            std::env::var("FOLIO_DIR")
                .ok()
                .map(|dir| PathBuf::from(dir).join("folio.yaml")),
            dirs::config_dir().map(|dir| dir.join("folio").join("folio.yaml")),
            Some(PathBuf::from("folio.yaml")),
        ];

        for path in candidates.into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Failed to load config from {}: {}", path.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.reveal.validate().context("Invalid config file")?;
        config.source = Some(path.as_ref().to_path_buf());

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Directory holding folio.yaml and content.yaml
    pub fn folio_dir() -> PathBuf {
        std::env::var("FOLIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("folio"))
    }

    /// Expand `path` and anchor it to the config file's directory when
    /// it is relative
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        let expanded = Self::expand_path(path);
        if expanded.is_absolute() {
            return expanded;
        }
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(expanded),
            _ => expanded,
        }
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveal_matches_page_timings() {
        let reveal = RevealConfig::default();
        assert!(reveal.enabled);
        assert_eq!(reveal.threshold, 0.1);
        assert_eq!(reveal.duration_ms, 600);
        assert_eq!(reveal.offset_px, 20);
        assert_eq!(reveal.stagger_ms, 100);
        assert_eq!(reveal.item_duration_ms, 500);
    }

    #[test]
    fn test_default_output() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("index.html"));
        assert!(config.content.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "reveal:\n  threshold: 0.5\nlog_level: debug\n";
        let config: Config = serde_yaml::from_str(yaml).expect("Failed to parse");
        assert_eq!(config.reveal.threshold, 0.5);
        assert_eq!(config.reveal.duration_ms, 600);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output, PathBuf::from("index.html"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yaml");
        fs::write(&path, "output: site/index.html\nreveal:\n  enabled: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output, PathBuf::from("site/index.html"));
        assert!(!config.reveal.enabled);
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yaml");

        for bad in ["1.5", "-0.1", ".nan", ".inf"] {
            fs::write(&path, format!("reveal:\n  threshold: {bad}\n")).unwrap();
            let err = Config::load(Some(&path)).unwrap_err();
            assert!(format!("{:?}", err).contains("reveal.threshold"), "accepted threshold {bad}");
        }

        fs::write(&path, "reveal:\n  threshold: 1.0\n").unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap().reveal.threshold, 1.0);
    }

    #[test]
    fn test_loaded_config_remembers_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yaml");
        fs::write(&path, "content: content.yaml\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.resolve_path(&PathBuf::from("content.yaml")),
            dir.path().join("content.yaml")
        );
        assert_eq!(
            config.resolve_path(&PathBuf::from("/abs/content.yaml")),
            PathBuf::from("/abs/content.yaml")
        );
    }

    #[test]
    fn test_resolve_path_without_source_is_cwd_relative() {
        let config = Config::default();
        assert_eq!(config.resolve_path(&PathBuf::from("content.yaml")), PathBuf::from("content.yaml"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/folio.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_expand_path_no_expansion() {
        let path = PathBuf::from("/srv/www/index.html");
        assert_eq!(Config::expand_path(&path), path);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(&PathBuf::from("~/content.yaml"));
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.to_string_lossy().ends_with("content.yaml"));
    }

    #[test]
    fn test_log_level_filter_names() {
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
        assert_eq!(LogLevel::Off.as_filter(), "off");
    }
}
