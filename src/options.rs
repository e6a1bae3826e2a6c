//! Configuration options for article extraction.
//!
//! This module provides [`ExtractorOptions`] and [`ExtractorOptionsBuilder`].
//! Defaults come from the tables in [`constants`](crate::constants); the builder
//! replaces any table without touching extraction logic.
//!
//! ## Example
//!
//! ```rust
//! use newscrape::{Extractor, ExtractorOptions};
//!
//! let options = ExtractorOptions::builder()
//!     .min_paragraph_chars(20)
//!     .author_selectors(vec![".contributor".to_string()])
//!     .build();
//!
//! let extractor = Extractor::new(options);
//! ```

use crate::author::AuthorBoundary;
use crate::constants::{
    AUTHOR_ATTRIBUTE_TERMS, AUTHOR_META_SELECTORS, AUTHOR_PHRASES, AUTHOR_SELECTORS,
    CONTENT_SELECTORS, MIN_PARAGRAPH_CHARS, TITLE_SELECTORS,
};
use crate::dom_utils::SelectorList;
use crate::error::Result;
use once_cell::sync::Lazy;

static DEFAULT_OPTIONS: Lazy<ExtractorOptions> = Lazy::new(|| ExtractorOptions {
    title_selectors: SelectorList::parse_lossy(TITLE_SELECTORS),
    content_selectors: SelectorList::parse_lossy(CONTENT_SELECTORS),
    author_selectors: SelectorList::parse_lossy(AUTHOR_SELECTORS),
    author_meta_selectors: SelectorList::parse_lossy(AUTHOR_META_SELECTORS),
    author_phrases: to_owned_list(AUTHOR_PHRASES),
    author_attribute_terms: to_owned_list(AUTHOR_ATTRIBUTE_TERMS),
    author_boundary: AuthorBoundary::default(),
    min_paragraph_chars: MIN_PARAGRAPH_CHARS,
});

/// Configuration for the extraction chains.
///
/// Every list is ordered by priority; earlier entries win.
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Selectors for headline containers, most specific first.
    ///
    /// Only the first element each selector matches is considered. The
    /// document `<title>` is always tried after this list.
    pub title_selectors: SelectorList,

    /// Selectors for the element wrapping the article body.
    pub content_selectors: SelectorList,

    /// Byline selectors tried before any metadata or text scanning.
    pub author_selectors: SelectorList,

    /// `<meta>` selectors whose `content` attribute may hold the author.
    pub author_meta_selectors: SelectorList,

    /// Lead-in phrases searched for in visible text ("By ", "Written by ", ...).
    pub author_phrases: Vec<String>,

    /// Lowercase terms that mark an attribute value as author-related.
    pub author_attribute_terms: Vec<String>,

    /// Where a phrase-matched author name ends.
    pub author_boundary: AuthorBoundary,

    /// Paragraphs need strictly more characters than this to count as body text.
    ///
    /// Default: `40`
    pub min_paragraph_chars: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        DEFAULT_OPTIONS.clone()
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builder for [`ExtractorOptions`].
///
/// Selector lists are given as source strings. [`build`](Self::build) drops
/// selectors that fail to parse; [`try_build`](Self::try_build) reports them.
#[derive(Default)]
pub struct ExtractorOptionsBuilder {
    title_selectors: Option<Vec<String>>,
    content_selectors: Option<Vec<String>>,
    author_selectors: Option<Vec<String>>,
    author_meta_selectors: Option<Vec<String>>,
    author_phrases: Option<Vec<String>>,
    author_attribute_terms: Option<Vec<String>>,
    author_boundary: Option<AuthorBoundary>,
    min_paragraph_chars: Option<usize>,
}

impl ExtractorOptionsBuilder {
    pub fn title_selectors(mut self, selectors: Vec<String>) -> Self {
        self.title_selectors = Some(selectors);
        self
    }

    pub fn content_selectors(mut self, selectors: Vec<String>) -> Self {
        self.content_selectors = Some(selectors);
        self
    }

    pub fn author_selectors(mut self, selectors: Vec<String>) -> Self {
        self.author_selectors = Some(selectors);
        self
    }

    pub fn author_meta_selectors(mut self, selectors: Vec<String>) -> Self {
        self.author_meta_selectors = Some(selectors);
        self
    }

    pub fn author_phrases(mut self, phrases: Vec<String>) -> Self {
        self.author_phrases = Some(phrases);
        self
    }

    /// Terms are matched case-insensitively.
    pub fn author_attribute_terms(mut self, terms: Vec<String>) -> Self {
        self.author_attribute_terms = Some(terms.into_iter().map(|t| t.to_lowercase()).collect());
        self
    }

    pub fn author_boundary(mut self, boundary: AuthorBoundary) -> Self {
        self.author_boundary = Some(boundary);
        self
    }

    pub fn min_paragraph_chars(mut self, min: usize) -> Self {
        self.min_paragraph_chars = Some(min);
        self
    }

    /// Build the ExtractorOptions, skipping invalid selectors
    pub fn build(self) -> ExtractorOptions {
        self.assemble(|patterns| Ok(SelectorList::parse_lossy(patterns)))
            .unwrap_or_default()
    }

    /// Build the ExtractorOptions, failing on the first invalid selector
    pub fn try_build(self) -> Result<ExtractorOptions> {
        self.assemble(SelectorList::parse::<String>)
    }

    fn assemble<F>(self, compile: F) -> Result<ExtractorOptions>
    where
        F: Fn(&[String]) -> Result<SelectorList>,
    {
        let defaults = &*DEFAULT_OPTIONS;
        let compile_or = |patterns: Option<Vec<String>>, default: &SelectorList| match patterns {
            Some(patterns) => compile(&patterns),
            None => Ok(default.clone()),
        };

        Ok(ExtractorOptions {
            title_selectors: compile_or(self.title_selectors, &defaults.title_selectors)?,
            content_selectors: compile_or(self.content_selectors, &defaults.content_selectors)?,
            author_selectors: compile_or(self.author_selectors, &defaults.author_selectors)?,
            author_meta_selectors: compile_or(
                self.author_meta_selectors,
                &defaults.author_meta_selectors,
            )?,
            author_phrases: self
                .author_phrases
                .unwrap_or_else(|| defaults.author_phrases.clone()),
            author_attribute_terms: self
                .author_attribute_terms
                .unwrap_or_else(|| defaults.author_attribute_terms.clone()),
            author_boundary: self
                .author_boundary
                .unwrap_or_else(|| defaults.author_boundary.clone()),
            min_paragraph_chars: self
                .min_paragraph_chars
                .unwrap_or(defaults.min_paragraph_chars),
        })
    }
}
