//! Headline extraction.

use crate::chain::{run_chain, CandidateIter, ExtractionCandidate, Strategy};
use crate::constants::TITLE_SENTINEL;
use crate::dom_utils::element_text;
use crate::options::ExtractorOptions;
use crate::text::{clean, TextKind};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static DOCUMENT_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

const TITLE_CHAIN: &[Strategy] = &[
    Strategy {
        name: "selector",
        candidates: selector_candidates,
    },
    Strategy {
        name: "document-title",
        candidates: document_title_candidates,
    },
];

/// Find the article headline, or `None` when no strategy yields text.
pub fn find_title(document: &Html, options: &ExtractorOptions) -> Option<String> {
    run_chain("title", TITLE_CHAIN, document, options, |candidate| {
        let text = clean(&candidate.text, TextKind::Title);
        (!text.is_empty()).then(|| ExtractionCandidate::new(candidate.rule, text))
    })
    .map(|candidate| candidate.text)
}

/// Extract the article headline, substituting `"Title not found"` when nothing matches.
pub fn extract_title(document: &Html, options: &ExtractorOptions) -> String {
    find_title(document, options).unwrap_or_else(|| TITLE_SENTINEL.to_string())
}

/// First element per selector only; later matches of the same selector are never merged.
fn selector_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(options.title_selectors.iter().filter_map(move |(rule, selector)| {
        let el = document.select(selector).next()?;
        Some(ExtractionCandidate::new(rule, element_text(&el)))
    }))
}

fn document_title_candidates<'a>(document: &'a Html, _: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(
        document
            .select(&DOCUMENT_TITLE_SELECTOR)
            .next()
            .map(|el| ExtractionCandidate::new("title", element_text(&el)))
            .into_iter(),
    )
}
