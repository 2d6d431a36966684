//! Approximate vertical layout of the page, for reveal simulation

use super::{Page, Row, Section};
use crate::reveal::viewport::Extent;

const HEADER_HEIGHT: f64 = 360.0;
const MAIN_PADDING: f64 = 64.0;
const SECTION_TITLE: f64 = 72.0;
const SECTION_GAP: f64 = 80.0;
const CARD_PADDING: f64 = 64.0;
const CARD_GAP: f64 = 32.0;
const LINE_HEIGHT: f64 = 28.0;
const TAG_ROW_HEIGHT: f64 = 44.0;
const CHARS_PER_LINE: usize = 90;
const TAGS_PER_ROW: usize = 4;

fn text_height(text: &str) -> f64 {
    let lines = text.chars().count().div_ceil(CHARS_PER_LINE).max(1);
    lines as f64 * LINE_HEIGHT
}

fn row_height(row: &Row) -> f64 {
    match row {
        Row::Paragraph { text } => CARD_PADDING + text_height(text),
        Row::Card(card) => {
            let mut h = CARD_PADDING + LINE_HEIGHT;
            if card.subheading.is_some() {
                h += LINE_HEIGHT;
            }
            if let Some(body) = &card.body {
                h += text_height(body);
            }
            h + card.tags.len().div_ceil(TAGS_PER_ROW) as f64 * TAG_ROW_HEIGHT
        }
    }
}

/// Estimated height of a section including its title
pub fn section_height(section: &Section) -> f64 {
    let rows: f64 = section.rows.iter().map(row_height).sum();
    let gaps = section.rows.len().saturating_sub(1) as f64 * CARD_GAP;
    SECTION_TITLE + rows + gaps
}

/// Named extents of every reveal-wrapped section, top to bottom
pub fn section_extents(page: &Page) -> Vec<(String, Extent)> {
    let mut top = HEADER_HEIGHT + MAIN_PADDING;
    page.sections
        .iter()
        .map(|section| {
            let height = section_height(section);
            let extent = Extent { top, height };
            top += height + SECTION_GAP;
            (section.kind.id().to_string(), extent)
        })
        .collect()
}
