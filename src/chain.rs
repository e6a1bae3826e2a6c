//! Ordered fallback chains.
//!
//! Each extractor is a slice of [`Strategy`] records evaluated left to right.
//! A strategy lazily yields [`ExtractionCandidate`]s; the first candidate the
//! extractor accepts ends the whole chain, so later strategies never run.

use crate::options::ExtractorOptions;
use scraper::Html;

/// Text matched by one rule while walking a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionCandidate {
    /// Selector source or rule id that produced the text.
    pub rule: String,
    pub text: String,
}

impl ExtractionCandidate {
    pub fn new(rule: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            text: text.into(),
        }
    }
}

pub(crate) type CandidateIter<'a> = Box<dyn Iterator<Item = ExtractionCandidate> + 'a>;

pub(crate) struct Strategy {
    pub name: &'static str,
    pub candidates: for<'a> fn(&'a Html, &'a ExtractorOptions) -> CandidateIter<'a>,
}

/// Run `chain` in order and return the first candidate `accept` keeps.
///
/// `accept` may rewrite the candidate (cleaning its text) before keeping it.
pub(crate) fn run_chain<F>(
    field: &'static str,
    chain: &[Strategy],
    document: &Html,
    options: &ExtractorOptions,
    mut accept: F,
) -> Option<ExtractionCandidate>
where
    F: FnMut(ExtractionCandidate) -> Option<ExtractionCandidate>,
{
    for strategy in chain {
        if let Some(found) = (strategy.candidates)(document, options).find_map(&mut accept) {
            tracing::debug!(
                field,
                strategy = strategy.name,
                rule = %found.rule,
                "extracted"
            );
            return Some(found);
        }
        tracing::trace!(field, strategy = strategy.name, "strategy exhausted");
    }
    tracing::warn!(field, "no strategy produced a value");
    None
}
