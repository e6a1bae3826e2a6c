//! Command-line front end: fetch one news article and print what was extracted.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use newscrape::{ArticleRecord, ExtractorOptions, FetchOptions, Scraper};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RULE_WIDTH: usize = 80;

/// Scrape a news article and print its title, author and body text.
#[derive(Parser, Debug)]
#[command(name = "newscrape")]
#[command(about = "Extract title, author and body text from a news article URL", long_about = None)]
struct Args {
    /// Article URL (http/https)
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, env = "NEWSCRAPE_USER_AGENT")]
    user_agent: Option<String>,

    /// Print the record as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newscrape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("scraping failed: {:#}", err);
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut fetch = FetchOptions::default().timeout(Duration::from_secs(args.timeout));
    if let Some(user_agent) = &args.user_agent {
        fetch = fetch.user_agent(user_agent.clone());
    }

    let scraper = Scraper::new(fetch, ExtractorOptions::default())
        .context("failed to build HTTP client")?;
    let record = scraper.scrape(&args.url)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_report(&record);
    }
    Ok(())
}

fn print_report(record: &ArticleRecord) {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    println!("\n{}", heavy);
    println!("NEWS ARTICLE SCRAPER");
    println!("{}", heavy);
    println!("URL: {}", record.url());
    println!("Status: {}", record.status());
    println!("Content Length: {} characters", record.content_length());
    println!("{}", light);
    println!("TITLE: {}", record.title());
    println!("AUTHOR: {}", record.author().unwrap_or("Author not found"));
    println!("{}", light);
    println!("CONTENT:");
    if record.content().is_empty() {
        println!("No content available");
    } else {
        println!("{}", record.content());
    }
    println!("{}", heavy);
}
