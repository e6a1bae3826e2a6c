//! Text normalization shared by the title, content and author extractors.

use crate::constants::{
    AUTHOR_PREFIXES, AUTHOR_SUFFIXES, MAX_AUTHOR_CHARS, MIN_AUTHOR_CHARS, REGEXPS,
};

/// Which extractor a piece of text is being cleaned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Title,
    Author,
    /// Body text; blank-line paragraph boundaries survive normalization.
    Content,
}

/// Normalize raw element text for the given [`TextKind`].
///
/// All kinds collapse whitespace runs to a single space and trim the ends.
/// `Content` keeps runs holding two or more line breaks as `"\n\n"`, and
/// `Author` strips byline lead-ins such as "By " or "Written by " until none
/// remain.
///
/// ```rust
/// use newscrape::{clean, TextKind};
///
/// assert_eq!(clean("  By  By\nJane   Doe ", TextKind::Author), "Jane Doe");
/// assert_eq!(clean("One.\n\n\n  Two.", TextKind::Content), "One.\n\nTwo.");
/// ```
pub fn clean(raw: &str, kind: TextKind) -> String {
    match kind {
        TextKind::Title => collapse_whitespace(raw),
        TextKind::Content => REGEXPS
            .paragraph_break
            .split(raw)
            .map(collapse_whitespace)
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
        TextKind::Author => strip_author_decorations(collapse_whitespace(raw)),
    }
}

/// Returns `true` when `s` is plausible as an author name.
///
/// The name must be between 2 and 100 characters long and contain at least
/// one alphabetic character.
pub fn is_valid_author(s: &str) -> bool {
    let len = s.chars().count();
    (MIN_AUTHOR_CHARS..=MAX_AUTHOR_CHARS).contains(&len) && s.chars().any(char::is_alphabetic)
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    REGEXPS.whitespace.replace_all(raw.trim(), " ").into_owned()
}

fn strip_author_decorations(mut text: String) -> String {
    loop {
        let before = text.len();

        if let Some(prefix) = AUTHOR_PREFIXES
            .iter()
            .find(|prefix| starts_with_ignore_case(&text, prefix))
        {
            text = text[prefix.len()..].trim_start().to_string();
        }
        if let Some(suffix) = AUTHOR_SUFFIXES.iter().find(|suffix| text.ends_with(*suffix)) {
            text.truncate(text.len() - suffix.len());
            text.truncate(text.trim_end().len());
        }

        if text.len() == before {
            return text;
        }
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
