use crate::config::types::{CompressionConfig, Config, CrawlerConfig, LlmConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_compression_config(&config.compression)?;
    validate_llm_config(&config.llm)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // page_limit = 0 is a legal (if useless) bound: the crawl scans nothing

    if config.fetch_timeout_secs < 1 || config.fetch_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be between 1 and 300, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates compression configuration
fn validate_compression_config(config: &CompressionConfig) -> Result<(), ConfigError> {
    if config.header_word_limit > 1000 {
        return Err(ConfigError::Validation(format!(
            "header_word_limit must be <= 1000, got {}",
            config.header_word_limit
        )));
    }

    if config.paragraph_word_limit > 1000 {
        return Err(ConfigError::Validation(format!(
            "paragraph_word_limit must be <= 1000, got {}",
            config.paragraph_word_limit
        )));
    }

    Ok(())
}

/// Validates LLM client configuration
fn validate_llm_config(config: &LlmConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.api_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "api_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if config.max_tokens < 1 {
        return Err(ConfigError::Validation(format!(
            "max_tokens must be >= 1, got {}",
            config.max_tokens
        )));
    }

    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(ConfigError::Validation(format!(
            "temperature must be between 0.0 and 2.0, got {}",
            config.temperature
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}
