//! Render the page to HTML

use colored::*;
use eyre::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::content::loader;
use crate::page::{self, Page};
use crate::render::{html, write_atomic};

pub fn run(output: Option<PathBuf>, stdout: bool, no_reveal: bool, year: Option<i32>, config: &Config) -> Result<()> {
    let content = loader::resolve(config).context("Failed to resolve page content")?;
    let year = year.unwrap_or_else(page::current_year);
    let page = Page::build(&content, year);

    let mut reveal = config.reveal;
    if no_reveal {
        reveal.enabled = false;
    }
    log::debug!("Rendering page for {} ({}), reveal enabled: {}", page.header.name, year, reveal.enabled);

    let document = html::render(&page, &reveal);

    if stdout {
        print!("{}", document);
        return Ok(());
    }

    let path = Config::expand_path(&output.unwrap_or_else(|| config.output.clone()));
    write_atomic(&path, &document)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}
