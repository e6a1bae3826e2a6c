//! Author (byline) extraction.
//!
//! The chain walks from precise structural signals to noisy ones:
//!
//! 1. byline selectors (`.byline`, `[itemprop~='author']`, ...)
//! 2. `<meta name="author">` / `<meta property="article:author">`
//! 3. lead-in phrases in visible text ("By ", "Written by ", ...)
//! 4. any element whose class mentions "author"
//! 5. any element with an attribute value mentioning an author term
//!
//! Each candidate is cleaned with [`TextKind::Author`] and must pass
//! [`is_valid_author`]; the first one that does wins.

use crate::chain::{run_chain, CandidateIter, ExtractionCandidate, Strategy};
use crate::constants::AUTHOR_BOUNDARY_TERMINATORS;
use crate::dom_utils::{self, candidate_text, element_text};
use crate::options::ExtractorOptions;
use crate::text::{clean, is_valid_author, TextKind};
use scraper::Html;

const AUTHOR_CHAIN: &[Strategy] = &[
    Strategy {
        name: "selector",
        candidates: selector_candidates,
    },
    Strategy {
        name: "metadata",
        candidates: metadata_candidates,
    },
    Strategy {
        name: "pattern",
        candidates: pattern_candidates,
    },
    Strategy {
        name: "class",
        candidates: class_candidates,
    },
    Strategy {
        name: "attribute",
        candidates: attribute_candidates,
    },
];

/// Extract the article author, or `None` once every strategy is exhausted.
///
/// The returned name is never empty.
pub fn extract_author(document: &Html, options: &ExtractorOptions) -> Option<String> {
    run_chain("author", AUTHOR_CHAIN, document, options, |candidate| {
        let text = clean(&candidate.text, TextKind::Author);
        is_valid_author(&text).then(|| ExtractionCandidate::new(candidate.rule, text))
    })
    .map(|candidate| candidate.text)
}

/// Rule deciding where an author name found after a lead-in phrase ends.
///
/// The name runs up to the first terminator character. With `keep_initials`
/// set, a `.` directly after a one-letter word ("J. R. R. Tolkien") is read as
/// an initial and does not end the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBoundary {
    pub terminators: Vec<char>,
    pub keep_initials: bool,
}

impl Default for AuthorBoundary {
    fn default() -> Self {
        Self {
            terminators: AUTHOR_BOUNDARY_TERMINATORS.to_vec(),
            keep_initials: true,
        }
    }
}

impl AuthorBoundary {
    /// The prefix of `text` that forms the author name.
    pub fn cut<'t>(&self, text: &'t str) -> &'t str {
        for (idx, ch) in text.char_indices() {
            if !self.terminators.contains(&ch) {
                continue;
            }
            if ch == '.' && self.keep_initials && ends_with_initial(&text[..idx]) {
                continue;
            }
            return &text[..idx];
        }
        text
    }
}

fn ends_with_initial(before: &str) -> bool {
    let word = before.rsplit(char::is_whitespace).next().unwrap_or_default();
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

fn selector_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(options.author_selectors.iter().flat_map(move |(rule, selector)| {
        document
            .select(selector)
            .map(move |el| ExtractionCandidate::new(rule, candidate_text(&el)))
    }))
}

fn metadata_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(
        options
            .author_meta_selectors
            .iter()
            .flat_map(move |(rule, selector)| {
                document.select(selector).filter_map(move |meta| {
                    let content = meta.value().attr("content")?;
                    // article:author is frequently a profile URL rather than a name
                    if is_web_url(content) {
                        return None;
                    }
                    Some(ExtractionCandidate::new(rule, content))
                })
            }),
    )
}

fn is_web_url(value: &str) -> bool {
    url::Url::parse(value.trim())
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn pattern_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    let text = dom_utils::visible_text(document);
    Box::new(
        options
            .author_phrases
            .iter()
            .flat_map(move |phrase| phrase_matches(&text, phrase, &options.author_boundary)),
    )
}

/// Every occurrence of `phrase` that starts a word, with the name after it.
fn phrase_matches(text: &str, phrase: &str, boundary: &AuthorBoundary) -> Vec<ExtractionCandidate> {
    text.match_indices(phrase)
        .filter(|(idx, _)| {
            text[..*idx]
                .chars()
                .next_back()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true)
        })
        .map(|(idx, _)| {
            let rest = &text[idx + phrase.len()..];
            ExtractionCandidate::new(format!("phrase:{}", phrase.trim()), boundary.cut(rest))
        })
        .collect()
}

fn class_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(dom_utils::all_elements(document).filter_map(move |el| {
        let class = el.value().attr("class")?;
        if !class.to_lowercase().contains("author") {
            return None;
        }
        // already tried by the selector scan
        if options.author_selectors.matches_any(&el) {
            return None;
        }
        Some(ExtractionCandidate::new(
            format!("class:{}", class.trim()),
            element_text(&el),
        ))
    }))
}

fn attribute_candidates<'a>(document: &'a Html, options: &'a ExtractorOptions) -> CandidateIter<'a> {
    Box::new(dom_utils::all_elements(document).filter_map(move |el| {
        let (name, value) = el.value().attrs().find(|(name, value)| {
            !name.eq_ignore_ascii_case("class") && {
                let value = value.to_lowercase();
                options
                    .author_attribute_terms
                    .iter()
                    .any(|term| value.contains(term.as_str()))
            }
        })?;
        // already tried by the metadata scan
        if options.author_meta_selectors.matches_any(&el) {
            return None;
        }
        let text = candidate_text(&el);
        if is_web_url(&text) {
            return None;
        }
        Some(ExtractionCandidate::new(format!("attr:{}={}", name, value), text))
    }))
}
