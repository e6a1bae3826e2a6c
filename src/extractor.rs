//! The extraction orchestrator.
//!
//! [`Extractor`] runs the title, content and author chains against one parsed
//! document and assembles an [`ArticleRecord`].
//!
//! ## Example
//!
//! ```rust
//! use newscrape::{Extractor, ExtractionStatus};
//!
//! let html = r#"
//!     <html>
//!     <head><meta name="author" content="Jane Doe"></head>
//!     <body>
//!         <h1 class="headline">Article Title</h1>
//!         <div class="article-body">
//!             <p>First paragraph of content, long enough to count as article body text.</p>
//!             <p>Second paragraph of content, also long enough to count as body text.</p>
//!         </div>
//!     </body>
//!     </html>
//! "#;
//!
//! let record = Extractor::default().extract_html(html, "https://example.com/article");
//!
//! assert_eq!(record.title(), "Article Title");
//! assert_eq!(record.author(), Some("Jane Doe"));
//! assert_eq!(record.status(), ExtractionStatus::Success);
//! ```

use crate::{
    article::ArticleRecord, author::extract_author, content::extract_content,
    options::ExtractorOptions, title::find_title,
};
use scraper::Html;

/// Runs the extraction chains with a fixed set of options.
///
/// Extraction only reads the document, so one `Extractor` can serve many
/// documents, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractorOptions,
}

impl Extractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract an article record from an already parsed document.
    ///
    /// `url` is only copied into the record. The same document always yields
    /// the same record.
    pub fn extract(&self, document: &Html, url: &str) -> ArticleRecord {
        let title = find_title(document, &self.options);
        let content = extract_content(document, &self.options);
        let author = extract_author(document, &self.options);

        let record = ArticleRecord::new(url, title, content, author);
        tracing::debug!(
            url,
            status = %record.status(),
            content_length = record.content_length(),
            "article extracted"
        );
        record
    }

    /// Parse `html` and extract an article record from it.
    pub fn extract_html(&self, html: &str, url: &str) -> ArticleRecord {
        let document = Html::parse_document(html);
        self.extract(&document, url)
    }
}

/// Extract an article record using the default options.
pub fn extract(document: &Html, url: &str) -> ArticleRecord {
    Extractor::default().extract(document, url)
}
