//! Body text extraction.
//!
//! The body is built from the paragraphs of the first container that yields
//! any qualifying paragraph. When no container does, every `<p>` in the
//! document is scanned instead.

use crate::chain::{run_chain, CandidateIter, ExtractionCandidate, Strategy};
use crate::dom_utils::element_text;
use crate::options::ExtractorOptions;
use crate::text::{clean, collapse_whitespace, TextKind};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid paragraph selector"));

const CONTENT_CHAIN: &[Strategy] = &[
    Strategy {
        name: "container",
        candidates: container_candidates,
    },
    Strategy {
        name: "document",
        candidates: document_candidates,
    },
];

/// Extract the article body as paragraphs separated by blank lines.
///
/// Returns an empty string when no paragraph anywhere in the document is long
/// enough to qualify.
pub fn extract_content(document: &Html, options: &ExtractorOptions) -> String {
    run_chain("content", CONTENT_CHAIN, document, options, |candidate| {
        (!candidate.text.is_empty()).then_some(candidate)
    })
    .map(|candidate| candidate.text)
    .unwrap_or_default()
}

fn container_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(options.content_selectors.iter().filter_map(move |(rule, selector)| {
        let container = document.select(selector).next()?;
        let body = join_paragraphs(container.select(&PARAGRAPH_SELECTOR), options.min_paragraph_chars);
        Some(ExtractionCandidate::new(rule, body))
    }))
}

fn document_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    let body = join_paragraphs(document.select(&PARAGRAPH_SELECTOR), options.min_paragraph_chars);
    Box::new(std::iter::once(ExtractionCandidate::new("p", body)))
}

fn join_paragraphs<'a>(paragraphs: impl Iterator<Item = ElementRef<'a>>, min_chars: usize) -> String {
    let qualifying: Vec<String> = paragraphs
        .map(|p| collapse_whitespace(&element_text(&p)))
        .filter(|text| text.chars().count() > min_chars)
        .collect();
    clean(&qualifying.join("\n\n"), TextKind::Content)
}
