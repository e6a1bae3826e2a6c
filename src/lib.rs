//! # newscrape
//!
//! Extract a structured article record (title, body text, author) from the HTML
//! of an arbitrary news page.
//!
//! ## Overview
//!
//! Publishers mark up articles in wildly different ways, so each field is found
//! by an ordered fallback chain of generic heuristics. The first strategy in a
//! chain that produces a valid value wins; more specific signals always come
//! before noisier ones.
//!
//! - **Title**: headline selectors, then the document `<title>`, then the
//!   `"Title not found"` placeholder.
//! - **Content**: paragraphs of the first recognized article container, then
//!   every paragraph in the document. Short paragraphs (captions, credits) are
//!   dropped.
//! - **Author**: byline selectors, `<meta>` author tags, "By ..." phrases in the
//!   page text, then class and attribute heuristics.
//!
//! "Not found" is never an error. It shows up in the record's
//! [`ExtractionStatus`] instead.
//!
//! ## Basic Usage
//!
//! ```rust
//! use newscrape::{extract, ExtractionStatus, Html};
//!
//! let html = r#"
//!     <html>
//!     <head><title>Site Name</title></head>
//!     <body>
//!         <h1 class="headline">Storm Hits Coast</h1>
//!         <p class="byline">By A. Reporter</p>
//!         <div class="article-body">
//!             <p>The storm made landfall shortly after midnight, flooding streets along the coast.</p>
//!         </div>
//!     </body>
//!     </html>
//! "#;
//!
//! let document = Html::parse_document(html);
//! let record = extract(&document, "https://example.com/storm");
//!
//! assert_eq!(record.title(), "Storm Hits Coast");
//! assert_eq!(record.author(), Some("A. Reporter"));
//! assert_eq!(record.status(), ExtractionStatus::Success);
//! ```
//!
//! ## Custom Options
//!
//! Selector tables, lead-in phrases and thresholds can all be replaced:
//!
//! ```rust
//! use newscrape::{Extractor, ExtractorOptions};
//!
//! let options = ExtractorOptions::builder()
//!     .min_paragraph_chars(20)
//!     .content_selectors(vec!["div.story".to_string(), "article".to_string()])
//!     .build();
//!
//! let record = Extractor::new(options).extract_html("<html>...</html>", "https://example.com");
//! ```
//!
//! ## Fetching
//!
//! [`Scraper`] adds a blocking HTTP layer in front of the extractor:
//!
//! ```rust,no_run
//! use newscrape::{ExtractorOptions, FetchOptions, ScrapeError, Scraper};
//! use std::time::Duration;
//!
//! let fetch = FetchOptions::default().timeout(Duration::from_secs(10));
//! let scraper = Scraper::new(fetch, ExtractorOptions::default())?;
//!
//! match scraper.scrape("https://example.com/news/storm") {
//!     Ok(record) => println!("{}: {}", record.status(), record.title()),
//!     Err(ScrapeError::Timeout { seconds, .. }) => eprintln!("gave up after {}s", seconds),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok::<(), ScrapeError>(())
//! ```
//!
//! ## Concurrency
//!
//! Extraction is synchronous and only reads the document. An [`Extractor`] can
//! be shared between threads; batching and retries are left to the caller.

mod article;
mod author;
mod chain;
pub mod constants;
mod content;
mod dom_utils;
mod error;
mod extractor;
mod fetch;
mod options;
mod scrape;
mod text;
mod title;

// Public exports
pub use article::{ArticleRecord, ExtractionStatus};
pub use author::{extract_author, AuthorBoundary};
pub use chain::ExtractionCandidate;
pub use constants::TITLE_SENTINEL;
pub use content::extract_content;
pub use dom_utils::SelectorList;
pub use error::{Result, ScrapeError};
pub use extractor::{extract, Extractor};
pub use fetch::{validate_url, FetchOptions, FetchedPage, Fetcher};
pub use options::{ExtractorOptions, ExtractorOptionsBuilder};
pub use scrape::Scraper;
pub use scraper::Html;
pub use text::{clean, is_valid_author, TextKind};
pub use title::{extract_title, find_title};
