//! Configuration module for sitebrief
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section has defaults, so running without a config file is
//! supported.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CompressionConfig, Config, CrawlerConfig, LlmConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
