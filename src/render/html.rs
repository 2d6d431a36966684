//! HTML document renderer
//!
//! Produces one self-contained document: inline stylesheet, markup, and a
//! small script that reveals each `.reveal` block the first time it
//! intersects the viewport. Browsers without `IntersectionObserver`, or
//! whose observer refuses the options, get every block shown immediately;
//! with JavaScript off, a `<noscript>` style does the same. The header and
//! footer play their own entrance animations on load.

use crate::config::RevealConfig;
use crate::content::ContactLink;
use crate::page::{Card, Header, Page, Row, Section};
use crate::reveal::Transition;

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render(page: &Page, reveal: &RevealConfig) -> String {
    HtmlRenderer { page, reveal }.document()
}

struct HtmlRenderer<'a> {
    page: &'a Page,
    reveal: &'a RevealConfig,
}

impl HtmlRenderer<'_> {
    fn document(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.page.header.name)));
        out.push_str(&format!("<style>\n{}</style>\n", self.stylesheet()));
        if self.reveal.enabled {
            out.push_str(
                "<noscript><style>.reveal, .stagger-item { opacity: 1; transform: none; }</style></noscript>\n",
            );
        }
        out.push_str("</head>\n<body>\n");

        out.push_str(&self.header(&self.page.header));
        out.push_str("<main>\n");
        for section in &self.page.sections {
            out.push_str(&self.section(section));
        }
        out.push_str("</main>\n");

        out.push_str(&format!(
            "<footer><p>{}</p></footer>\n",
            escape(&self.page.footer.text())
        ));

        if self.reveal.enabled {
            out.push_str(&format!("<script>\n{}</script>\n", self.script()));
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn stylesheet(&self) -> String {
        let block = Transition::block(self.reveal);
        let item = Transition::staggered(self.reveal, 0);
        format!(
            r#"body {{ margin: 0; font-family: system-ui, sans-serif; color: #4b5563; background: linear-gradient(135deg, #f9fafb, #f3f4f6); }}
header {{ background: #fff; box-shadow: 0 10px 15px rgba(0,0,0,.1); padding: 5rem 1rem; text-align: center; }}
header .hero {{ animation: scale-in .8s ease-out both; }}
header h1 {{ font-size: 3.5rem; margin: 0; background: linear-gradient(90deg, #9333ea, #db2777); -webkit-background-clip: text; background-clip: text; color: transparent; animation: drop-in .8s ease-out .2s both; }}
header .tagline {{ font-size: 1.25rem; animation: rise-in .8s ease-out .4s both; }}
header nav {{ display: flex; justify-content: center; gap: 1.5rem; margin-top: 1.5rem; animation: rise-in .8s ease-out .6s both; }}
header a {{ color: inherit; text-decoration: none; }}
main {{ max-width: 64rem; margin: 0 auto; padding: 4rem 1rem; }}
section {{ margin-bottom: 5rem; }}
h2 {{ font-size: 1.875rem; color: #111827; border-bottom: 4px solid #9333ea; display: inline-block; padding-bottom: .25rem; }}
.card {{ background: #fff; border-radius: .5rem; box-shadow: 0 20px 25px rgba(0,0,0,.1); padding: 2rem; margin-bottom: 2rem; }}
.card .subheading {{ color: #9333ea; font-weight: 500; }}
.tags {{ display: flex; flex-wrap: wrap; gap: .75rem; padding: 0; list-style: none; }}
.tags li {{ background: linear-gradient(90deg, #f3e8ff, #fce7f3); color: #1f2937; padding: .5rem 1rem; border-radius: 9999px; font-size: .875rem; }}
footer {{ background: #fff; border-top: 1px solid #e5e7eb; margin-top: 5rem; padding: 2rem 1rem; text-align: center; color: #6b7280; }}
footer p {{ animation: fade-in 1s ease-out both; }}
@keyframes scale-in {{ from {{ opacity: 0; transform: scale(.9); }} to {{ opacity: 1; transform: none; }} }}
@keyframes drop-in {{ from {{ opacity: 0; transform: translateY(-20px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes rise-in {{ from {{ opacity: 0; transform: translateY(20px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes fade-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}
.reveal {{ opacity: 0; transform: translateY({offset}px); transition: opacity {block_ms}ms ease-out, transform {block_ms}ms ease-out; }}
.reveal.is-visible {{ opacity: 1; transform: none; }}
.stagger-item {{ opacity: 0; transform: translateY({offset}px); transition: opacity {item_ms}ms ease-out, transform {item_ms}ms ease-out; }}
.reveal.is-visible .stagger-item {{ opacity: 1; transform: none; }}
"#,
            offset = block.offset_px,
            block_ms = block.duration.as_millis(),
            item_ms = item.duration.as_millis(),
        )
    }

    fn script(&self) -> String {
        format!(
            r#"(function () {{
  var blocks = document.querySelectorAll('.reveal');
  function show(el) {{ el.classList.add('is-visible'); }}
  if (!('IntersectionObserver' in window)) {{
    blocks.forEach(show);
    return;
  }}
  try {{
    var observer = new IntersectionObserver(function (entries) {{
      entries.forEach(function (entry) {{
        if (entry.isIntersecting && entry.intersectionRatio >= {threshold}) {{
          show(entry.target);
          observer.unobserve(entry.target);
        }}
      }});
    }}, {{ threshold: {threshold} }});
    blocks.forEach(function (el) {{ observer.observe(el); }});
  }} catch (e) {{
    blocks.forEach(show);
  }}
}})();
"#,
            threshold = self.reveal.threshold,
        )
    }

    fn header(&self, header: &Header) -> String {
        let mut out = String::from("<header>\n<div class=\"hero\">\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape(&header.name)));
        out.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape(&header.tagline)));
        out.push_str("<nav>\n");
        out.push_str(&format!("<span class=\"location\">⌖ {}</span>\n", escape(&header.location)));
        for link in &header.links {
            out.push_str(&contact_link(link));
        }
        out.push_str("</nav>\n</div>\n</header>\n");
        out
    }

    fn section(&self, section: &Section) -> String {
        let class = if self.reveal.enabled { "reveal" } else { "reveal is-visible" };
        let mut out = format!("<div class=\"{class}\">\n<section id=\"{}\">\n", section.kind.id());
        out.push_str(&format!("<h2>{}</h2>\n", escape(section.title())));
        for (index, row) in section.rows.iter().enumerate() {
            let markup = match row {
                Row::Paragraph { text } => format!("<div class=\"card\"><p>{}</p></div>\n", escape(text)),
                Row::Card(card) => card_markup(card),
            };
            if section.kind.is_staggered() {
                let delay = Transition::staggered(self.reveal, index).delay;
                out.push_str(&format!(
                    "<div class=\"stagger-item\" style=\"transition-delay: {}ms\">\n{}</div>\n",
                    delay.as_millis(),
                    markup
                ));
            } else {
                out.push_str(&markup);
            }
        }
        out.push_str("</section>\n</div>\n");
        out
    }
}

fn contact_link(link: &ContactLink) -> String {
    let target = if link.is_external() {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a href=\"{}\"{}>{} {}</a>\n",
        escape(&link.href),
        target,
        link.kind.glyph(),
        escape(&link.label)
    )
}

fn card_markup(card: &Card) -> String {
    let mut out = String::from("<div class=\"card\">\n");
    match &card.link {
        Some(url) => out.push_str(&format!(
            "<h3>{} <a href=\"{}\" aria-label=\"Open project\">↗</a></h3>\n",
            escape(&card.heading),
            escape(url)
        )),
        None => out.push_str(&format!("<h3>{}</h3>\n", escape(&card.heading))),
    }
    if let Some(sub) = &card.subheading {
        out.push_str(&format!("<p class=\"subheading\">{}</p>\n", escape(sub)));
    }
    if let Some(body) = &card.body {
        out.push_str(&format!("<p>{}</p>\n", escape(body)));
    }
    if !card.tags.is_empty() {
        out.push_str("<ul class=\"tags\">");
        for tag in &card.tags {
            out.push_str(&format!("<li>{}</li>", escape(tag)));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn builtin_html(reveal: &RevealConfig) -> String {
        render(&Page::build(&Content::default(), 2026), reveal)
    }

    fn tag_items(html: &str) -> Vec<&str> {
        html.split("<li>")
            .skip(1)
            .filter_map(|chunk| chunk.split("</li>").next())
            .collect()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("HTML/CSS"), "HTML/CSS");
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_document_shell() {
        let html = builtin_html(&RevealConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Susmita Yogi</title>"));
        assert!(html.contains("© 2026 Susmita Yogi. All rights reserved."));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_tags_render_in_order_without_duplication() {
        let content = Content::default();
        let html = builtin_html(&RevealConfig::default());

        let mut expected: Vec<&str> = Vec::new();
        for group in &content.skill_groups {
            expected.extend(group.skills.iter().map(String::as_str));
        }
        for project in &content.projects {
            expected.extend(project.tech.iter().map(String::as_str));
        }
        assert_eq!(tag_items(&html), expected);
    }

    #[test]
    fn test_sections_wrapped_in_reveal() {
        let html = builtin_html(&RevealConfig::default());
        assert_eq!(html.matches("<div class=\"reveal\">").count(), 4);
        assert!(html.contains("threshold: 0.1"));
        assert!(html.contains("translateY(20px)"));
        assert!(html.contains("600ms"));
        assert!(html.contains("<noscript>"));
    }

    #[test]
    fn test_script_falls_back_to_visible() {
        let html = builtin_html(&RevealConfig::default());
        let script = html.split("<script>").nth(1).unwrap();

        let missing = "if (!('IntersectionObserver' in window)) {\n    blocks.forEach(show);\n    return;\n  }";
        assert!(script.contains(missing));
        assert!(script.contains("} catch (e) {\n    blocks.forEach(show);\n  }"));

        // The observer is only constructed inside the guarded block.
        let try_at = script.find("try {").unwrap();
        let observer_at = script.find("new IntersectionObserver").unwrap();
        assert!(try_at < observer_at);
        assert!(script.find("catch (e)").unwrap() > observer_at);
    }

    #[test]
    fn test_header_and_footer_entrance_animations() {
        let html = builtin_html(&RevealConfig::default());
        assert!(html.contains("@keyframes scale-in { from { opacity: 0; transform: scale(.9); }"));
        assert!(html.contains("@keyframes drop-in { from { opacity: 0; transform: translateY(-20px); }"));
        assert!(html.contains("@keyframes rise-in { from { opacity: 0; transform: translateY(20px); }"));
        assert!(html.contains("@keyframes fade-in { from { opacity: 0; }"));

        assert!(html.contains("header .hero { animation: scale-in .8s ease-out both; }"));
        assert!(html.contains("animation: drop-in .8s ease-out .2s both;"));
        assert!(html.contains("header .tagline { font-size: 1.25rem; animation: rise-in .8s ease-out .4s both; }"));
        assert!(html.contains("animation: rise-in .8s ease-out .6s both;"));
        assert!(html.contains("footer p { animation: fade-in 1s ease-out both; }"));
        assert!(html.contains("<header>\n<div class=\"hero\">\n<h1>Susmita Yogi</h1>"));
    }

    #[test]
    fn test_stagger_delays() {
        let html = builtin_html(&RevealConfig::default());
        // two skill groups + three experience entries
        assert_eq!(html.matches("class=\"stagger-item\"").count(), 5);
        assert_eq!(html.matches("transition-delay: 0ms").count(), 2);
        assert_eq!(html.matches("transition-delay: 200ms").count(), 1);
    }

    #[test]
    fn test_disabled_reveal_renders_visible_without_script() {
        let config = RevealConfig {
            enabled: false,
            ..RevealConfig::default()
        };
        let html = builtin_html(&config);
        assert_eq!(html.matches("<div class=\"reveal is-visible\">").count(), 4);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<noscript>"));
    }

    #[test]
    fn test_contact_links() {
        let html = builtin_html(&RevealConfig::default());
        assert!(html.contains("<a href=\"mailto:yogisusmita99@gmail.com\">✉ Email</a>"));
        assert!(html.contains("<a href=\"https://github.com\" target=\"_blank\" rel=\"noopener noreferrer\">"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut content = Content::default();
        content.about = "<script>alert(1)</script>".to_string();
        let html = render(&Page::build(&content, 2026), &RevealConfig::default());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
