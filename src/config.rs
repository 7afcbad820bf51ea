//! Configuration for the lexalign binary and server.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::align::AlignerConfig;
use crate::error::{LexalignError, Result};
use crate::lexicon::{InMemoryLexicon, LexicalDatabase, WordNetDatabase};

/// Top-level configuration, loadable from a JSON file.
///
/// Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexalignConfig {
    pub lexicon: LexiconConfig,
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub aligner: AlignerConfig,
}

/// Where the lexical database comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// WordNet `dict/` directory.
    pub wordnet_dir: Option<PathBuf>,
    /// JSON file of synonym groups, used instead of WordNet when set.
    pub synonyms_file: Option<PathBuf>,
}

impl LexiconConfig {
    /// Open the configured database. A synonyms file takes precedence over
    /// a WordNet directory.
    pub fn open(&self) -> Result<Arc<dyn LexicalDatabase>> {
        if let Some(path) = &self.synonyms_file {
            return Ok(Arc::new(InMemoryLexicon::load_from_file(path)?));
        }
        if let Some(dir) = &self.wordnet_dir {
            return Ok(Arc::new(WordNetDatabase::open(dir)?));
        }
        Err(LexalignError::resource_unavailable(
            "no lexical database configured, pass --wordnet-dir or --synonyms",
        ))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Synonym closure cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Upper bound on cached words; unbounded when absent.
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: Some(100_000),
        }
    }
}

impl LexalignConfig {
    /// Load configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexalignError::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        let config: LexalignConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(LexalignError::config("server port must be non-zero"));
        }
        if self.server.host.trim().is_empty() {
            return Err(LexalignError::config("server host must not be empty"));
        }
        if self.cache.max_entries == Some(0) && self.cache.enabled {
            return Err(LexalignError::config(
                "cache max_entries must be positive when the cache is enabled",
            ));
        }
        self.aligner.validate()
    }
}
