//! Configuration management for jadoc
//!
//! Handles loading and parsing of `jadoc.toml` configuration file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analyzer::DEFAULT_DICTIONARY;

/// Environment variable overriding the configured dictionary URI.
pub const ENV_DICTIONARY: &str = "JADOC_DICTIONARY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Tokenizer settings
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Conjugation service settings
    #[serde(default)]
    pub conjugation: ConjugationConfig,
}

/// Tokenizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Lindera dictionary URI (e.g., "embedded://ipadic", "embedded://unidic")
    #[serde(default = "default_dictionary")]
    pub dictionary: String,

    /// Optional user dictionary (CSV or compiled) extending the system one
    #[serde(default)]
    pub user_dictionary: Option<String>,

    /// Check the tokenizer against known sentences before use
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            user_dictionary: None,
            validate: true,
        }
    }
}

/// Conjugation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationConfig {
    /// Build every ending table when the service is created instead of on
    /// first use
    #[serde(default = "default_true")]
    pub warm_up: bool,
}

impl Default for ConjugationConfig {
    fn default() -> Self {
        Self { warm_up: true }
    }
}

fn default_dictionary() -> String {
    DEFAULT_DICTIONARY.to_string()
}

fn default_true() -> bool {
    true
}

/// Non-empty value of [`ENV_DICTIONARY`].
fn env_dictionary() -> Option<String> {
    std::env::var(ENV_DICTIONARY).ok().filter(|uri| !uri.is_empty())
}

impl Config {
    /// Load configuration from file, defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "jadoc")
            .map(|dirs| dirs.config_dir().join("jadoc.toml"))
    }

    /// First readable `jadoc.toml` of the workspace and the user config
    /// directory, with [`ENV_DICTIONARY`] applied on top
    pub fn load_from_default() -> Self {
        let candidates = [Some(PathBuf::from("jadoc.toml")), Self::default_path()];
        let config = candidates
            .into_iter()
            .flatten()
            .filter(|path| path.exists())
            .find_map(|path| match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();
        config.with_dictionary(env_dictionary())
    }

    /// Replaces the dictionary URI when `uri` is given
    pub fn with_dictionary(mut self, uri: Option<String>) -> Self {
        if let Some(uri) = uri {
            self.tokenizer.dictionary = uri;
        }
        self
    }

    /// Effective dictionary URI; the environment wins over the file
    pub fn dictionary_uri(&self) -> String {
        env_dictionary().unwrap_or_else(|| self.tokenizer.dictionary.clone())
    }
}
