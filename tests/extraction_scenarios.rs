//! End-to-end extraction over complete article pages.

use newscrape::{
    clean, extract, extract_author, extract_content, is_valid_author, ExtractionStatus,
    ExtractorOptions, Html, TextKind, TITLE_SENTINEL,
};
use pretty_assertions::assert_eq;

const P1: &str = "Residents along the eastern shoreline woke to rising water as the storm pushed inland overnight.";
const P2: &str = "Emergency crews spent the morning clearing debris from the coastal highway and checking on shelters.";
const P3: &str = "Forecasters expect the system to weaken by Thursday, though heavy rain is likely to continue for days.";

fn article_page(head_extra: &str, body_extra: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
        <html>
        <head>
            <title>Site Name</title>
            {head_extra}
        </head>
        <body>
            <nav><a href="/">Home</a> <a href="/world">World</a></nav>
            <h1 class="headline">Storm Hits Coast</h1>
            {body_extra}
            <div class="article-body">
                <p>{P1}</p>
                <figure><figcaption><p>Photo: Staff</p></figcaption></figure>
                <p>{P2}</p>
                <p>{P3}</p>
            </div>
            <footer><p>© Site Name</p></footer>
        </body>
        </html>"#
    )
}

#[test]
fn scenario_a_full_article() {
    let html = article_page(r#"<meta name="author" content="A. Reporter">"#, "");
    let document = Html::parse_document(&html);

    let record = extract(&document, "https://news.example.com/storm");

    assert_eq!(record.url(), "https://news.example.com/storm");
    assert_eq!(record.title(), "Storm Hits Coast");
    assert_eq!(record.content(), format!("{P1}\n\n{P2}\n\n{P3}"));
    assert_eq!(record.author(), Some("A. Reporter"));
    assert_eq!(record.status(), ExtractionStatus::Success);
    assert_eq!(record.content_length(), record.content().chars().count());
}

#[test]
fn scenario_b_no_usable_content() {
    let html = r#"
        <html>
        <head><title>Gallery</title></head>
        <body>
            <h1>Photos of the week</h1>
            <div class="gallery">
                <p>Photo one.</p>
                <p>Photo two, a sunset.</p>
            </div>
            <p>Share this page</p>
        </body>
        </html>
    "#;
    let document = Html::parse_document(html);

    let record = extract(&document, "https://news.example.com/gallery");

    assert_eq!(record.content(), "");
    assert_eq!(record.content_length(), 0);
    assert_eq!(record.status(), ExtractionStatus::Failed);
}

#[test]
fn scenario_c_no_author_signal() {
    let html = article_page("", "");
    let document = Html::parse_document(&html);

    let record = extract(&document, "https://news.example.com/storm");

    assert_eq!(record.title(), "Storm Hits Coast");
    assert!(!record.content().is_empty());
    assert_eq!(record.author(), None);
    assert_eq!(record.status(), ExtractionStatus::Partial);
}

#[test]
fn profile_url_metadata_leaves_author_missing() {
    let html = article_page(
        r#"<meta property="article:author" content="https://www.facebook.com/someone">"#,
        "",
    );
    let record = extract(&Html::parse_document(&html), "https://news.example.com/storm");

    assert_eq!(record.author(), None);
    assert_eq!(record.status(), ExtractionStatus::Partial);
}

#[test]
fn byline_split_across_a_link_is_found() {
    let html = article_page(
        "",
        r#"<div class="meta">By <a href="/people/jane">Jane Doe</a> | 4 min read</div>"#,
    );
    let record = extract(&Html::parse_document(&html), "https://news.example.com/storm");

    assert_eq!(record.author(), Some("Jane Doe"));
    assert_eq!(record.status(), ExtractionStatus::Success);
}

#[test]
fn byline_selector_wins_over_loose_text() {
    let html = article_page(
        "",
        r#"<p class="credit">By John Roe</p><div class="byline">Jane Doe</div>"#,
    );
    let document = Html::parse_document(&html);

    let author = extract_author(&document, &ExtractorOptions::default());

    assert_eq!(author.as_deref(), Some("Jane Doe"));
}

#[test]
fn byline_selector_wins_over_metadata() {
    let html = article_page(
        r#"<meta name="author" content="Meta Author">"#,
        r#"<span class="byline">By Document Author</span>"#,
    );
    let record = extract(&Html::parse_document(&html), "https://news.example.com/a");

    assert_eq!(record.author(), Some("Document Author"));
}

#[test]
fn title_falls_back_to_document_title_then_sentinel() {
    let with_title_tag = format!(
        "<html><head><title>Only Title</title></head><body><article><p>{P1}</p></article></body></html>"
    );
    let record = extract(&Html::parse_document(&with_title_tag), "u");
    assert_eq!(record.title(), "Only Title");

    let bare = format!("<html><body><article><p>{P1}</p></article></body></html>");
    let record = extract(&Html::parse_document(&bare), "u");
    assert_eq!(record.title(), TITLE_SENTINEL);
    assert_eq!(record.status(), ExtractionStatus::Partial);
}

#[test]
fn content_length_matches_content_for_qualifying_pages() {
    let pages = [
        article_page("", ""),
        format!("<html><body><p>{P2}</p></body></html>"),
        format!("<html><body><main><p>Intro</p><p>{P3} Ünïcödé text.</p></main></body></html>"),
        format!("<html><body><article><p>{P1}</p></article><p>{P2}</p></body></html>"),
    ];

    for html in &pages {
        let document = Html::parse_document(html);
        let content = extract_content(&document, &ExtractorOptions::default());
        assert!(!content.is_empty());

        let record = extract(&document, "u");
        assert_eq!(record.content(), content);
        assert_eq!(record.content_length(), content.chars().count());
        assert_ne!(record.status(), ExtractionStatus::Failed);
    }
}

#[test]
fn author_cleaning_properties() {
    for raw in ["By By Jane Doe", "  written by   Jane\nDoe |", "Posted by — Jane Doe", "by"] {
        let once = clean(raw, TextKind::Author);
        assert_eq!(clean(&once, TextKind::Author), once);
    }

    assert!(is_valid_author("Jane Doe"));
    assert!(is_valid_author("J. R. R. Tolkien"));
    assert!(!is_valid_author("2024-01-01"));
    assert!(!is_valid_author("..."));
    assert!(!is_valid_author("X"));
    assert!(!is_valid_author(&"Name ".repeat(30)));
}

#[test]
fn extractor_can_be_shared_across_threads() {
    let extractor = std::sync::Arc::new(newscrape::Extractor::default());
    let html = article_page(r#"<meta name="author" content="A. Reporter">"#, "");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = extractor.clone();
            let html = html.clone();
            std::thread::spawn(move || extractor.extract_html(&html, "u"))
        })
        .collect();

    let records: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(records.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(records[0].status(), ExtractionStatus::Success);
}
