//! Sitebrief main entry point
//!
//! Command-line interface: crawl a website, print the per-page briefs, and
//! optionally ask an LLM a question over the crawled context.

use anyhow::Context as _;
use clap::Parser;
use sitebrief::compress::render_context;
use sitebrief::config::{load_config_with_hash, Config};
use sitebrief::crawler::SiteCrawler;
use sitebrief::llm::LlmClient;
use sitebrief::nlp::HeuristicTagger;
use sitebrief::{HeaderSummary, PageBrief, WordCount};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitebrief: bounded website crawling and text compression
///
/// Crawls a handful of pages reachable from a site's primary navigation,
/// compresses each into ranked word frequencies, and prints the result as
/// compact per-page briefs.
#[derive(Parser, Debug)]
#[command(name = "sitebrief")]
#[command(version)]
#[command(about = "Crawl a website into compact per-page briefs", long_about = None)]
struct Cli {
    /// Start URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured page limit
    #[arg(short, long, value_name = "N")]
    page_limit: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the briefs as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Ask the LLM a question, using the crawled briefs as context
    #[arg(long, value_name = "PROMPT", requires = "api_key")]
    ask: Option<String>,

    /// API key for the LLM endpoint
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(limit) = cli.page_limit {
        config.crawler.page_limit = limit;
    }

    let llm_config = config.llm.clone();

    // Run the crawl
    let crawler = SiteCrawler::new(config, HeuristicTagger::new())?;
    let briefs = crawler.crawl(&cli.url).await?;
    tracing::info!("Crawled {} pages", briefs.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&briefs)?);
    } else {
        print_briefs(&briefs);
    }

    // Optional LLM question over the crawled context
    if let Some(prompt) = cli.ask {
        let api_key = cli.api_key.context("--ask requires --api-key")?;
        let client = LlmClient::new(llm_config, api_key)?;

        tracing::info!("Querying LLM");
        let context = render_context(&briefs);
        let answer = client.complete(&context, &prompt).await?;

        println!();
        println!("{}", answer);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitebrief=info,warn"),
            1 => EnvFilter::new("sitebrief=debug,info"),
            2 => EnvFilter::new("sitebrief=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the crawled briefs as readable text
fn print_briefs(briefs: &[PageBrief]) {
    for brief in briefs {
        if brief.title.is_empty() {
            println!("=== {} ===", brief.url);
        } else {
            println!("=== {} ({}) ===", brief.title, brief.url);
        }

        match &brief.headers {
            HeaderSummary::Full(headers) if !headers.is_empty() => {
                println!("Headers:");
                for header in headers {
                    println!("  - {}", header);
                }
            }
            HeaderSummary::Ranked(words) if !words.is_empty() => {
                println!("Header terms:");
                print_words(words);
            }
            _ => {}
        }

        if !brief.paragraphs.is_empty() {
            println!("Paragraph terms:");
            print_words(&brief.paragraphs);
        }

        println!();
    }
}

fn print_words(words: &[WordCount]) {
    for word in words {
        println!("  {:>4}  {}", word.count, word.word);
    }
}
