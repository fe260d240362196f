//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::defaults;
use crate::core::error::{Result, SiteUpError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of concurrent probes in flight
    pub concurrency: Option<usize>,

    /// Use HEAD requests instead of GET (some servers may not support HEAD)
    pub use_head_requests: Option<bool>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: None, // Will default to CPU core count
            use_head_requests: Some(defaults::USE_HEAD_REQUESTS),
            user_agent: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, validating the result
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SiteUpError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SiteUpError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .siteup.toml in current directory
        if let Ok(config) = Self::load_from_file(".siteup.toml") {
            return config;
        }

        // Check for .siteup.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.siteup.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if cli_config.use_get {
            self.use_head_requests = Some(false);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(concurrency) = self.concurrency
            && concurrency == 0
        {
            return Err(SiteUpError::InvalidArgument(
                "concurrency must be greater than 0".to_string(),
            ));
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(SiteUpError::InvalidArgument(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Effective number of concurrent probes, defaulting to CPU core count
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(num_cpus::get)
    }
}

/// CLI argument values carried into the configuration merge.
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub concurrency: Option<usize>,
    pub use_get: bool,
    pub user_agent: Option<String>,
    pub verbose: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
