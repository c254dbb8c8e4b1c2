//! Configuration management.
//!
//! All knobs live in one explicit [`HarvestConfig`] resolved once at
//! startup: built-in defaults, then an optional TOML config file, then CLI
//! overrides. The collector receives the finished struct and carries no
//! defaults of its own.
//!
//! # Configuration File Format
//!
//! ```toml
//! url_file = "loop.txt"
//! keywords = ["lung cancer", "lung carcinoma", "adenocarcinoma"]
//! out_file = "medrxiv_matches.json"
//! delay_secs = 1.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Harvest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Plain-text file with one page-source URL per line
    #[serde(default = "default_url_file")]
    pub url_file: PathBuf,

    /// Keywords matched case-insensitively as substrings of the title
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Output file, also used for resumption
    #[serde(default = "default_out_file")]
    pub out_file: PathBuf,

    /// Delay between page requests, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            url_file: default_url_file(),
            keywords: default_keywords(),
            out_file: default_out_file(),
            delay_secs: default_delay_secs(),
        }
    }
}

fn default_url_file() -> PathBuf {
    PathBuf::from("loop.txt")
}

fn default_keywords() -> Vec<String> {
    vec![
        "lung cancer".to_string(),
        "lung carcinoma".to_string(),
        "adenocarcinoma".to_string(),
    ]
}

fn default_out_file() -> PathBuf {
    PathBuf::from("medrxiv_matches.json")
}

fn default_delay_secs() -> f64 {
    1.0
}

impl HarvestConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &PathBuf) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Find a config file in the default locations: `medrxiv-harvest.toml` in
/// the current directory, then `medrxiv-harvest/config.toml` in the user
/// config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("medrxiv-harvest.toml");
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("medrxiv-harvest").join("config.toml");
    if user.exists() {
        return Some(user);
    }

    None
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
