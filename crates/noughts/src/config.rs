//! Application configuration loaded from TOML.

use derive_getters::Getters;
use noughts_core::{ConfigError, EngineTuning, MatchConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when none is named.
const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Top-level configuration file.
///
/// ```toml
/// [match]
/// max_score = 3
/// max_rounds = 10
/// bot_delay_ms = 500
/// round_delay_ms = 1500
/// round_opener = "cross"
///
/// [engine]
/// normal_bypass = 0.5
/// hard_bypass = 0.2
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring thresholds and pacing.
    #[serde(rename = "match")]
    match_config: MatchConfig,
    /// Bot tier tuning.
    engine: EngineTuning,
}

impl AppConfig {
    /// Creates a configuration from its parts.
    #[instrument]
    pub fn new(match_config: MatchConfig, engine: EngineTuning) -> Self {
        Self {
            match_config,
            engine,
        }
    }

    /// Parses and validates a configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.match_config.validate()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            max_score = config.match_config.max_score(),
            max_rounds = config.match_config.max_rounds(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else `noughts.toml` when it exists, else defaults.
    ///
    /// A path given explicitly must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
