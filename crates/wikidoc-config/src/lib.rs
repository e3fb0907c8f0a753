use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikidoc_engine::{DEFAULT_MAX_DEPTH, KeywordTable, ParseOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("max_nesting_depth must be at least 1, got {0}")]
    InvalidNestingDepth(usize),
}

/// Parser settings from the `[parser]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    pub max_nesting_depth: usize,
    /// Recognize `%%name%%` keyword spans.
    pub keywords_enabled: bool,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            keywords_enabled: false,
        }
    }
}

/// Contents of `config.toml`:
///
/// ```toml
/// [parser]
/// max_nesting_depth = 32
/// keywords_enabled = true
///
/// [keywords]
/// VERSION = "1.0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
    pub keywords: BTreeMap<String, String>,
}

impl Config {
    /// Parses config text; `config_path` is only used for error reporting.
    pub fn from_toml_str<P: AsRef<Path>>(
        content: &str,
        config_path: P,
    ) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.as_ref().to_path_buf(),
            source,
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::warn!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content, config_path)?;
        log::debug!(
            "loaded config from {} ({} keywords)",
            config_path.display(),
            config.keywords.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikidoc");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn keyword_table(&self) -> KeywordTable {
        KeywordTable::from(self.keywords.clone())
    }

    /// Engine options for these settings. The keyword table is attached only
    /// when `keywords_enabled` is set.
    pub fn parse_options(&self) -> Result<ParseOptions, ConfigError> {
        let depth = self.parser.max_nesting_depth;
        if depth == 0 {
            return Err(ConfigError::InvalidNestingDepth(depth));
        }

        let options = ParseOptions::default().with_max_depth(depth);
        if self.parser.keywords_enabled {
            Ok(options.with_keywords(self.keyword_table()))
        } else {
            Ok(options)
        }
    }
}
