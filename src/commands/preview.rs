use eyre::Result;

use crate::config::Config;
use crate::content::loader;
use crate::page::{self, Page};
use crate::render::preview;

pub fn run(year: Option<i32>, config: &Config) -> Result<()> {
    let content = loader::resolve(config)?;
    let page = Page::build(&content, year.unwrap_or_else(page::current_year));
    print!("{}", preview::render_for_terminal(&page));
    Ok(())
}
