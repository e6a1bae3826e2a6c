//! Helpers over the parsed document tree.

use crate::constants::{BLOCK_TAGS, INVISIBLE_TAGS};
use crate::error::{Result, ScrapeError};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// An ordered list of compiled selectors, each remembered with its source text
/// so candidates can report which rule produced them.
#[derive(Debug, Clone)]
pub struct SelectorList {
    entries: Vec<(String, Selector)>,
}

impl SelectorList {
    /// Compile every pattern, failing on the first invalid one.
    pub fn parse<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let entries = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Selector::parse(pattern)
                    .map(|selector| (pattern.to_string(), selector))
                    .map_err(|e| ScrapeError::InvalidSelector(format!("{}: {}", pattern, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Compile every pattern, dropping the ones that do not parse.
    pub fn parse_lossy<S: AsRef<str>>(patterns: &[S]) -> Self {
        let entries = patterns
            .iter()
            .filter_map(|pattern| {
                let pattern = pattern.as_ref();
                match Selector::parse(pattern) {
                    Ok(selector) => Some((pattern.to_string(), selector)),
                    Err(e) => {
                        tracing::warn!(selector = pattern, error = %e, "skipping invalid selector");
                        None
                    }
                }
            })
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selector)> {
        self.entries.iter().map(|(src, sel)| (src.as_str(), sel))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any selector in the list matches `element`.
    pub fn matches_any(&self, element: &ElementRef) -> bool {
        self.entries.iter().any(|(_, sel)| sel.matches(element))
    }
}

/// Text of all descendants, concatenated in document order.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Text an author candidate should be read from: `content` for `<meta>`, inner text otherwise.
pub fn candidate_text(element: &ElementRef) -> String {
    if element.value().name().eq_ignore_ascii_case("meta") {
        element.value().attr("content").unwrap_or_default().to_string()
    } else {
        element_text(element)
    }
}

/// Every element of the document in document order.
pub fn all_elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.root_element().descendants().filter_map(ElementRef::wrap)
}

/// The text a reader would see, one line per block.
///
/// Subtrees under `script`, `style`, `noscript`, `template` or `head` are
/// skipped. Inline elements run together, so `By <a>Jane Doe</a>` reads as one
/// line; block-level elements and `<br>` start a new one. Whitespace inside a
/// line is collapsed and blank lines are dropped.
pub fn visible_text(document: &Html) -> String {
    let mut raw = String::new();
    push_visible_text(document.root_element(), &mut raw);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_visible_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            }
            Node::Element(el) => {
                let name = el.name();
                if INVISIBLE_TAGS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(child) = ElementRef::wrap(child) {
                    push_visible_text(child, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_list_reports_invalid_selector() {
        let result = SelectorList::parse(&["h1", "div[["]);
        assert!(matches!(result, Err(ScrapeError::InvalidSelector(_))));
    }

    #[test]
    fn test_selector_list_lossy_skips_invalid() {
        let list = SelectorList::parse_lossy(&["h1", "div[[", ".byline"]);
        let sources: Vec<&str> = list.iter().map(|(src, _)| src).collect();
        assert_eq!(sources, vec!["h1", ".byline"]);
    }

    #[test]
    fn test_visible_text_skips_scripts() {
        let html = r#"
            <html>
                <head><title>Hidden title</title></head>
                <body>
                    <p>Shown</p>
                    <script>var by = "By Nobody";</script>
                    <style>.x { color: red }</style>
                </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(visible_text(&document), "Shown");
    }

    #[test]
    fn test_visible_text_joins_inline_and_splits_blocks() {
        let html = r#"
            <html><body>
                <div class="meta">By <a href="/people/jane">Jane
                    Doe</a><span>, Staff</span></div>
                <p>First line<br>Second line</p>
                <ul><li>One</li><li>Two</li></ul>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            visible_text(&document),
            "By Jane Doe, Staff\nFirst line\nSecond line\nOne\nTwo"
        );
    }

    #[test]
    fn test_candidate_text_reads_meta_content() {
        let document =
            Html::parse_document(r#"<html><head><meta name="author" content="Ann Lee"></head></html>"#);
        let selector = Selector::parse("meta").unwrap();
        let meta = document.select(&selector).next().unwrap();
        assert_eq!(candidate_text(&meta), "Ann Lee");
    }
}
