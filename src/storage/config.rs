//! Engine configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Every section
//! defaults to the standard scoring constants, so a missing file or a partial
//! file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::metrics::analytics::motor_profile::ClassifierSettings;
use crate::metrics::composite::{CompositeWeights, VisionCaps};
use crate::swing::AgeGroup;

/// Composite weighting and provenance caps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeSettings {
    /// Component weights
    pub weights: CompositeWeights,
    /// Caps for 2D vision estimates
    pub vision_caps: VisionCaps,
}

/// Session aggregation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Swings slower than this (mph) are waggles, not swings
    pub waggle_floor_mph: f32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            waggle_floor_mph: 25.0,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine version that wrote the file
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Age group used when a capture does not name one
    pub default_age_group: AgeGroup,
    /// Motor profile evidence gate
    pub classifier: ClassifierSettings,
    /// Composite settings
    pub composite: CompositeSettings,
    /// Session settings
    pub session: SessionSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            default_age_group: AgeGroup::default(),
            classifier: ClassifierSettings::default(),
            composite: CompositeSettings::default(),
            session: SessionSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Check that weights and caps are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.composite.weights;
        let parts = [w.body, w.brain, w.bat, w.ball];
        if parts.iter().any(|p| *p < 0.0) {
            return Err(ConfigError::Invalid("composite weights must be non-negative".into()));
        }
        let total: f32 = parts.iter().sum();
        if (total - 1.0).abs() > 0.01 {
            return Err(ConfigError::Invalid(format!(
                "composite weights must sum to 1.0, got {:.2}",
                total
            )));
        }

        let caps = &self.composite.vision_caps;
        if !(0.0..=100.0).contains(&caps.brain) || !(0.0..=100.0).contains(&caps.ball) {
            return Err(ConfigError::Invalid("vision caps must be within 0-100".into()));
        }

        if self.classifier.min_confidence > 100 {
            return Err(ConfigError::Invalid("min_confidence must be within 0-100".into()));
        }

        if self.session.waggle_floor_mph < 0.0 {
            return Err(ConfigError::Invalid("waggle_floor_mph must be non-negative".into()));
        }

        Ok(())
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "swingmetrics", "SwingMetrics")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file, falling back to defaults if it is absent.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(EngineConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: EngineConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;
    config.validate()?;

    Ok(config)
}

/// Save configuration to a file.
pub fn save_config_to(config: &EngineConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
