//! Terminal preview of the page

use colored::*;
use terminal_size::{Width, terminal_size};

use crate::page::{Card, Page, Row};

fn get_terminal_width() -> usize {
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80)
}

/// Greedy word wrap to `width` columns
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Render the page for a terminal `width` columns wide
pub fn render(page: &Page, width: usize) -> String {
    let width = width.clamp(40, 100);
    let body = width - 4;
    let mut out = Vec::new();

    out.push(format!("{}", page.header.name.bold().magenta()));
    out.push(page.header.tagline.clone());
    let mut contacts = vec![format!("⌖ {}", page.header.location)];
    contacts.extend(
        page.header
            .links
            .iter()
            .map(|l| format!("{} {} <{}>", l.kind.glyph(), l.label, l.href.cyan())),
    );
    out.push(contacts.join("  "));
    out.push("═".repeat(width));

    for section in &page.sections {
        out.push(String::new());
        out.push(format!("{}", section.title().bold()));
        out.push("─".repeat(section.title().chars().count()).magenta().to_string());
        for row in &section.rows {
            match row {
                Row::Paragraph { text } => out.extend(wrap(text, body).into_iter().map(|l| format!("  {l}"))),
                Row::Card(card) => out.extend(card_lines(card, body)),
            }
        }
    }

    out.push(String::new());
    out.push("═".repeat(width));
    out.push(format!("{}", page.footer.text().dimmed()));
    out.join("\n") + "\n"
}

fn card_lines(card: &Card, body: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let heading = match &card.link {
        Some(url) => format!("  {} {}", card.heading.bold(), url.dimmed()),
        None => format!("  {}", card.heading.bold()),
    };
    lines.push(heading);
    if let Some(sub) = &card.subheading {
        lines.push(format!("  {}", sub.magenta()));
    }
    if let Some(text) = &card.body {
        lines.extend(wrap(text, body).into_iter().map(|l| format!("  {l}")));
    }
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("[{t}]")).collect();
        lines.extend(wrap(&tags.join(" "), body).into_iter().map(|l| format!("  {}", l.cyan())));
    }
    lines.push(String::new());
    lines
}

/// Render at the current terminal width
pub fn render_for_terminal(page: &Page) -> String {
    render(page, get_terminal_width())
}
