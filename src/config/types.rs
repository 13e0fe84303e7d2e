use serde::Deserialize;

/// Main configuration structure for sitebrief
///
/// Every section has defaults, so a config file is optional and may set
/// only the keys it cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub compression: CompressionConfig,
    pub llm: LlmConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of candidate positions scanned per crawl
    #[serde(rename = "page-limit")]
    pub page_limit: usize,

    /// Per-request timeout in seconds, applied uniformly to every fetch
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_limit: 5,
            fetch_timeout_secs: 30,
            user_agent: concat!("sitebrief/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Text compression configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Whether header text is compressed to ranked words or passed through
    #[serde(rename = "compress-headers")]
    pub compress_headers: bool,

    /// Word limit for compressed header text
    #[serde(rename = "header-word-limit")]
    pub header_word_limit: usize,

    /// Word limit for compressed paragraph text
    #[serde(rename = "paragraph-word-limit")]
    pub paragraph_word_limit: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            compress_headers: true,
            header_word_limit: 25,
            paragraph_word_limit: 50,
        }
    }
}

/// LLM client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat-completions endpoint URL
    #[serde(rename = "api-url")]
    pub api_url: String,

    /// Model identifier sent in the request payload
    pub model: String,

    /// Completion token budget
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://integrate.api.nvidia.com/v1/chat/completions".to_string(),
            model: "nvidia/llama-3.1-nemotron-70b-instruct".to_string(),
            max_tokens: 1024,
            // Higher temperature seems to generate better responses
            temperature: 0.8,
            timeout_secs: 30,
        }
    }
}
