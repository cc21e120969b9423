//! Content configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is read with the
//! `PATTERN_COMPASS` prefix and nested values use double underscores as
//! separators.
//!
//! The engine ships complete built-in content; configuration only points
//! at optional YAML files that override it (the domain-range table and
//! phrase overrides).
//!
//! # Example
//!
//! ```no_run
//! use pattern_compass::config::ContentConfig;
//!
//! let config = ContentConfig::load().expect("Failed to load configuration");
//! let ranges = config.domain_ranges().expect("Invalid domain-range file");
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::narrative::{PhraseLibrary, PhraseOverrides};
use crate::domain::quiz::DomainRangeTable;

/// Paths to optional content override files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentPaths {
    /// YAML file mapping life domains to answer index ranges.
    pub domain_ranges_path: Option<PathBuf>,

    /// YAML file overriding entries of the built-in phrase library.
    pub phrase_overrides_path: Option<PathBuf>,
}

/// Root configuration for the composition engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content override file locations.
    pub content: ContentPaths,
}

impl ContentConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PATTERN_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PATTERN_COMPASS__CONTENT__DOMAIN_RANGES_PATH=ranges.yaml`
    /// - `PATTERN_COMPASS__CONTENT__PHRASE_OVERRIDES_PATH=phrases.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Every value is optional, so an empty environment loads.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATTERN_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Resolves the domain-range table.
    ///
    /// Reads and parses the configured YAML file when a path is set,
    /// otherwise returns the built-in fallback table.
    pub fn domain_ranges(&self) -> Result<DomainRangeTable, ConfigError> {
        match &self.content.domain_ranges_path {
            Some(path) => {
                let yaml = read_content_file(path)?;
                DomainRangeTable::from_yaml_str(&yaml).map_err(|source| ConfigError::FileParse {
                    path: path.display().to_string(),
                    source,
                })
            }
            None => Ok(DomainRangeTable::fallback()),
        }
    }

    /// Resolves the phrase library.
    ///
    /// Layers the configured overrides file over the built-in content
    /// when a path is set, otherwise returns the built-in library.
    pub fn phrase_library(&self) -> Result<PhraseLibrary, ConfigError> {
        match &self.content.phrase_overrides_path {
            Some(path) => {
                let yaml = read_content_file(path)?;
                let overrides =
                    PhraseOverrides::from_yaml_str(&yaml).map_err(|source| {
                        ConfigError::FileParse {
                            path: path.display().to_string(),
                            source,
                        }
                    })?;
                Ok(PhraseLibrary::with_overrides(overrides))
            }
            None => Ok(PhraseLibrary::built_in()),
        }
    }
}

fn read_content_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.display().to_string(),
        source,
    })
}
