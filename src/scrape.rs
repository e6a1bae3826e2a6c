//! Fetch, parse and extract in one call.

use crate::{
    article::ArticleRecord,
    error::Result,
    extractor::Extractor,
    fetch::{FetchOptions, Fetcher},
    options::ExtractorOptions,
};

/// Number of title characters shown in the summary log line.
const TITLE_LOG_CHARS: usize = 50;

/// Scrapes article pages by URL.
///
/// ```rust,no_run
/// use newscrape::{ExtractorOptions, FetchOptions, Scraper};
///
/// let scraper = Scraper::new(FetchOptions::default(), ExtractorOptions::default())?;
/// let record = scraper.scrape("https://example.com/news/storm")?;
/// println!("{} ({})", record.title(), record.status());
/// # Ok::<(), newscrape::ScrapeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: Fetcher,
    extractor: Extractor,
}

impl Scraper {
    pub fn new(fetch_options: FetchOptions, extractor_options: ExtractorOptions) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_options)?,
            extractor: Extractor::new(extractor_options),
        })
    }

    /// Fetch `url` and extract its article.
    ///
    /// Network failures are errors. A page with no recognizable article is not:
    /// it comes back as a record with [`ExtractionStatus::Failed`](crate::ExtractionStatus::Failed).
    pub fn scrape(&self, url: &str) -> Result<ArticleRecord> {
        let page = self.fetcher.fetch(url)?;
        let record = self.extractor.extract_html(&page.body, url);

        let short_title: String = record.title().chars().take(TITLE_LOG_CHARS).collect();
        tracing::info!(
            url,
            final_url = %page.url,
            http_status = page.status,
            status = %record.status(),
            content_length = record.content_length(),
            "scraped article: {}",
            short_title
        );
        Ok(record)
    }
}
