use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Folio Configuration".bold());
            println!();

            println!("log_level: {}", config.log_level.as_filter());
            println!("output: {}", config.output.display());
            match &config.content {
                Some(path) => println!("content: {}", path.display()),
                None => println!("content: {}", "(built-in)".dimmed()),
            }
            println!();

            println!("{}:", "reveal".cyan());
            println!("  enabled: {}", config.reveal.enabled);
            println!("  threshold: {}", config.reveal.threshold);
            println!("  duration_ms: {}", config.reveal.duration_ms);
            println!("  offset_px: {}", config.reveal.offset_px);
            println!("  stagger_ms: {}", config.reveal.stagger_ms);
            println!("  item_duration_ms: {}", config.reveal.item_duration_ms);
        }
    }

    Ok(())
}

/// Look up a dotted key
pub fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "output" => Some(config.output.display().to_string()),
        "content" => config.content.as_ref().map(|p| p.display().to_string()),
        "reveal.enabled" => Some(config.reveal.enabled.to_string()),
        "reveal.threshold" => Some(config.reveal.threshold.to_string()),
        "reveal.duration_ms" => Some(config.reveal.duration_ms.to_string()),
        "reveal.offset_px" => Some(config.reveal.offset_px.to_string()),
        "reveal.stagger_ms" => Some(config.reveal.stagger_ms.to_string()),
        "reveal.item_duration_ms" => Some(config.reveal.item_duration_ms.to_string()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => eyre::bail!("Unknown or unset config key: {}", key),
    }
    Ok(())
}
