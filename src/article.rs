//! Article record representing the extraction output.
//!
//! ## Example
//!
//! ```rust
//! use newscrape::{extract, ExtractionStatus, Html};
//!
//! let html = r#"<html><body><article><h1>My Article</h1>
//!     <p>A paragraph long enough to be treated as article body text by the extractor.</p>
//! </article></body></html>"#;
//! let document = Html::parse_document(html);
//! let record = extract(&document, "https://example.com/my-article");
//!
//! assert_eq!(record.title(), "My Article");
//! assert_eq!(record.author(), None);
//! assert_eq!(record.status(), ExtractionStatus::Partial);
//! assert_eq!(record.content_length(), record.content().chars().count());
//! ```

use crate::constants::TITLE_SENTINEL;
use serde::Serialize;
use std::fmt;

/// How much of an article could be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionStatus {
    /// Title, body and author were all found.
    Success,
    /// Body was found but the title or the author was not.
    Partial,
    /// No qualifying body text was found.
    Failed,
}

impl fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExtractionStatus::Success => "SUCCESS",
            ExtractionStatus::Partial => "PARTIAL",
            ExtractionStatus::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

/// The structured result of one extraction.
///
/// Records are built by [`Extractor`](crate::Extractor) and cannot be changed
/// afterwards, so `content_length` always matches `content` and `status`
/// always matches the extracted fields.
///
/// ## Serialization
///
/// ```rust,no_run
/// # use newscrape::{extract, Html};
/// # let record = extract(&Html::parse_document("<html></html>"), "https://example.com");
/// let json = serde_json::to_string_pretty(&record).unwrap();
/// println!("{}", json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    url: String,
    title: String,
    content: String,
    author: Option<String>,
    content_length: usize,
    status: ExtractionStatus,
}

impl ArticleRecord {
    /// `title` is `None` when the title chain was exhausted; the record then
    /// carries the `"Title not found"` placeholder.
    pub(crate) fn new(
        url: impl Into<String>,
        title: Option<String>,
        content: String,
        author: Option<String>,
    ) -> Self {
        let author = author.filter(|a| !a.is_empty());
        let status = if content.is_empty() {
            ExtractionStatus::Failed
        } else if title.is_none() || author.is_none() {
            ExtractionStatus::Partial
        } else {
            ExtractionStatus::Success
        };

        Self {
            url: url.into(),
            title: title.unwrap_or_else(|| TITLE_SENTINEL.to_string()),
            content_length: content.chars().count(),
            content,
            author,
            status,
        }
    }

    /// URL the document was fetched from, passed through unchanged.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headline, or `"Title not found"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text with paragraphs separated by blank lines; empty on failure.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Length of [`content`](Self::content) in characters.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    pub fn status(&self) -> ExtractionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let full = ArticleRecord::new(
            "u",
            Some("T".into()),
            "Body".into(),
            Some("Ann Lee".into()),
        );
        assert_eq!(full.status(), ExtractionStatus::Success);

        let no_author = ArticleRecord::new("u", Some("T".into()), "Body".into(), None);
        assert_eq!(no_author.status(), ExtractionStatus::Partial);

        let no_title = ArticleRecord::new("u", None, "Body".into(), Some("Ann Lee".into()));
        assert_eq!(no_title.status(), ExtractionStatus::Partial);
        assert_eq!(no_title.title(), TITLE_SENTINEL);

        let no_body = ArticleRecord::new("u", Some("T".into()), String::new(), Some("Ann".into()));
        assert_eq!(no_body.status(), ExtractionStatus::Failed);
    }

    #[test]
    fn test_content_length_counts_characters() {
        let record = ArticleRecord::new("u", None, "Café – naïve".into(), None);
        assert_eq!(record.content_length(), 12);
    }

    #[test]
    fn test_empty_author_is_absent() {
        let record = ArticleRecord::new("u", Some("T".into()), "Body".into(), Some(String::new()));
        assert_eq!(record.author(), None);
        assert_eq!(record.status(), ExtractionStatus::Partial);
    }

    #[test]
    fn test_serializes_status_in_caps() {
        let record = ArticleRecord::new("https://example.com", None, String::new(), None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "FAILED");
        assert_eq!(json["author"], serde_json::Value::Null);
        assert_eq!(json["content_length"], 0);
    }
}
