//! Crawl coordination - the bounded traversal loop
//!
//! This module drives one crawl invocation:
//! - Mandatory root fetch and candidate discovery
//! - Position-bounded iteration over the candidate list
//! - Visited-set deduplication
//! - Per-page failure tolerance (log and continue)
//! - Extraction and compression of each successful page

use crate::compress::{PageBrief, TextCompressor};
use crate::config::Config;
use crate::crawler::discover::discover_candidates;
use crate::crawler::extract::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::nlp::Tagger;
use crate::{CrawlError, FetchError};
use reqwest::Client;
use scraper::Html;
use std::collections::HashSet;

/// Crawls a bounded set of pages within one website and compresses each
/// into a [`PageBrief`].
///
/// All state for a crawl (visited set, result list) is scoped to a single
/// `crawl` call; the crawler itself only holds the HTTP client and the
/// compressor and can be reused across invocations.
pub struct SiteCrawler<T: Tagger> {
    client: Client,
    compressor: TextCompressor<T>,
    config: Config,
}

impl<T: Tagger> SiteCrawler<T> {
    /// Creates a new crawler from a configuration and a tagging capability
    ///
    /// # Arguments
    ///
    /// * `config` - Crawler and compression configuration
    /// * `tagger` - Tagging capability injected into the compressor
    ///
    /// # Returns
    ///
    /// * `Ok(SiteCrawler)` - Ready to crawl
    /// * `Err(CrawlError)` - Failed to build the HTTP client
    pub fn new(config: Config, tagger: T) -> Result<Self, CrawlError> {
        let client = build_http_client(
            &config.crawler.user_agent,
            config.crawler.fetch_timeout_secs,
        )?;

        Ok(Self {
            client,
            compressor: TextCompressor::new(tagger),
            config,
        })
    }

    /// Crawls starting from `start_url` with the configured page limit
    pub async fn crawl(&self, start_url: &str) -> Result<Vec<PageBrief>, CrawlError> {
        self.crawl_with_limit(start_url, self.config.crawler.page_limit)
            .await
    }

    /// Crawls starting from `start_url`, scanning at most `page_limit`
    /// candidate positions
    ///
    /// The limit bounds positions scanned, not successful pages: skipped
    /// duplicates and failed fetches consume positions too, so the result
    /// may be shorter than the limit. Only the root fetch is fatal; every
    /// later failure is reported and the crawl moves on.
    pub async fn crawl_with_limit(
        &self,
        start_url: &str,
        page_limit: usize,
    ) -> Result<Vec<PageBrief>, CrawlError> {
        tracing::info!("Starting crawl of {} (page limit {})", start_url, page_limit);

        let root_markup =
            fetch_page(&self.client, start_url)
                .await
                .map_err(|source| CrawlError::RootFetch {
                    url: start_url.to_string(),
                    source,
                })?;

        let candidates = {
            let document = Html::parse_document(&root_markup);
            discover_candidates(start_url, &document)
        };
        tracing::debug!("Discovered {} candidate positions", candidates.len());

        let mut visited: HashSet<&str> = HashSet::new();
        let mut briefs = Vec::new();

        let positions = page_limit.min(candidates.len());
        for candidate in &candidates[..positions] {
            // Records attempts, not just successes: a failed URL appearing
            // at a later position is not retried within this crawl.
            if !visited.insert(candidate.as_str()) {
                tracing::debug!("Skipping already visited {}", candidate);
                continue;
            }

            match self.scrape_page(candidate).await {
                Ok(brief) => briefs.push(brief),
                Err(err) if err.is_transient() => {
                    tracing::info!("Skipping {}: {}", candidate, err);
                }
                Err(err) => {
                    tracing::warn!("Skipping malformed candidate {}: {}", candidate, err);
                }
            }
        }

        tracing::info!(
            "Crawl finished: {} briefs from {} scanned positions",
            briefs.len(),
            positions
        );

        Ok(briefs)
    }

    /// Fetches, extracts, and compresses a single page
    async fn scrape_page(&self, url: &str) -> Result<PageBrief, FetchError> {
        let markup = fetch_page(&self.client, url).await?;

        let record = {
            let document = Html::parse_document(&markup);
            extract_page(&document)
        };

        Ok(self
            .compressor
            .compress_page(url, &record, &self.config.compression))
    }
}
