//! Default selector tables, phrase lists and thresholds.
//!
//! Every list is ordered: earlier entries are more specific and win over later ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when no strategy yields a heading.
pub const TITLE_SENTINEL: &str = "Title not found";

/// Paragraphs must be strictly longer than this (in characters) to count as body text.
pub const MIN_PARAGRAPH_CHARS: usize = 40;

pub const MIN_AUTHOR_CHARS: usize = 2;
pub const MAX_AUTHOR_CHARS: usize = 100;

pub const TITLE_SELECTORS: &[&str] = &[
    "[data-testid='headline']",
    "h1.headline",
    "h1.article-title",
    "h1.entry-title",
    ".headline",
    ".article-title",
    ".entry-title",
    ".story-title",
    "article h1",
    "main h1",
    "h1",
];

pub const CONTENT_SELECTORS: &[&str] = &[
    "[data-testid='article-text']",
    "[itemprop='articleBody']",
    "div.article-body",
    "div.article-content",
    "div.story-body",
    "div.entry-content",
    "div.post-content",
    "div.zn-body__paragraph",
    "article",
    "main",
];

pub const AUTHOR_SELECTORS: &[&str] = &[
    ".byline",
    ".byline-author",
    ".author",
    ".author-name",
    ".article-author",
    ".post-author",
    ".story-author",
    ".by-author",
    ".writer",
    ".journalist",
    ".reporter",
    "[data-testid='author']",
    "[data-testid='byline']",
    "[data-author]",
    "[itemprop~='author']",
    "[rel~='author']",
];

/// `<meta>` selectors read through their `content` attribute.
pub const AUTHOR_META_SELECTORS: &[&str] =
    &["meta[name='author']", "meta[property='article:author']"];

pub const AUTHOR_PHRASES: &[&str] = &[
    "By ",
    "Written by ",
    "Author:",
    "Posted by ",
    "Reporter:",
    "Journalist:",
];

/// Matched case-insensitively at the start of an author candidate.
pub const AUTHOR_PREFIXES: &[&str] = &[
    "by ",
    "author:",
    "written by ",
    "posted by ",
    "reporter:",
    "journalist:",
    "—",
    "-",
];

pub const AUTHOR_SUFFIXES: &[&str] = &["|", "-", "•"];

/// Attribute values (other than `class`) containing one of these mark an author element.
pub const AUTHOR_ATTRIBUTE_TERMS: &[&str] = &["author", "byline"];

pub const AUTHOR_BOUNDARY_TERMINATORS: &[char] = &['.', '!', '?', '|', '\n', '\r'];

/// Elements whose text never counts as visible page text.
pub const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start a new line of visible text.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Compiled regular expressions shared by the normalizer.
pub struct Regexps {
    pub whitespace: Regex,
    pub paragraph_break: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    whitespace: Regex::new(r"\s+").unwrap(),
    paragraph_break: Regex::new(r"\s*\n\s*\n\s*").unwrap(),
});
