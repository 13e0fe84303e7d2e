//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawl pipeline:
//! - HTTP fetching with narrow failure classification
//! - Navigation link discovery
//! - Structural text extraction
//! - Bounded crawl coordination

mod coordinator;
mod discover;
mod extract;
mod fetcher;

pub use coordinator::SiteCrawler;
pub use discover::discover_candidates;
pub use extract::{extract_page, PageRecord};
pub use fetcher::{build_http_client, fetch_page};

use crate::compress::PageBrief;
use crate::config::Config;
use crate::nlp::HeuristicTagger;
use crate::CrawlError;

/// Runs one crawl with the built-in tagger
///
/// This is the main convenience entry point: it builds a [`SiteCrawler`]
/// with the default [`HeuristicTagger`], crawls from `start_url` with the
/// configured page limit, and returns the per-page briefs.
///
/// # Arguments
///
/// * `start_url` - Page to start from; its fetch is the one fatal failure
/// * `config` - Crawler and compression configuration
///
/// # Returns
///
/// * `Ok(Vec<PageBrief>)` - Zero or more per-page briefs
/// * `Err(CrawlError)` - Root fetch failed or client construction failed
///
/// # Example
///
/// ```no_run
/// use sitebrief::config::Config;
/// use sitebrief::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let briefs = crawl("https://example.com/", Config::default()).await?;
/// println!("crawled {} pages", briefs.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(start_url: &str, config: Config) -> Result<Vec<PageBrief>, CrawlError> {
    let crawler = SiteCrawler::new(config, HeuristicTagger::new())?;
    crawler.crawl(start_url).await
}
