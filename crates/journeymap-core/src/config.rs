use crate::error::{JourneyError, Result};
use crate::models::{FilterType, ValidityMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Initial map centre, `[longitude, latitude]`
pub const INITIAL_CENTER: [f64; 2] = [0.0, 30.0];

/// Default zoom of the global view
pub const DEFAULT_ZOOM: f64 = 1.8;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 10.0;

/// South-west and north-east corners the map may be panned to
pub const MAX_BOUNDS: [[f64; 2]; 2] = [[-180.0, -90.0], [180.0, 90.0]];

/// Clamp a zoom level into the supported range. NaN falls back to the default.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Journeymap
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_path: ConfigValue<PathBuf>,
    pub validity: ConfigValue<ValidityMode>,
    pub default_filter: ConfigValue<FilterType>,
    pub initial_zoom: ConfigValue<f64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_path: ConfigValue::new(PathBuf::from("data/map.json"), ConfigSource::Default),
            validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
            default_filter: ConfigValue::new(FilterType::All, ConfigSource::Default),
            initial_zoom: ConfigValue::new(DEFAULT_ZOOM, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| JourneyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| JourneyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_path) = file_config.data_path {
            self.data_path.update(data_path, ConfigSource::File);
        }

        if let Some(validity) = file_config.validity {
            self.validity.update(parse_validity_mode(&validity)?, ConfigSource::File);
        }

        if let Some(filter) = file_config.default_filter {
            self.default_filter.update(filter.parse()?, ConfigSource::File);
        }

        if let Some(zoom) = file_config.initial_zoom {
            self.initial_zoom.update(clamp_zoom(zoom), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // JOURNEYMAP_DATA
        if let Ok(path) = env::var("JOURNEYMAP_DATA") {
            self.data_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        // JOURNEYMAP_VALIDITY
        if let Ok(validity_str) = env::var("JOURNEYMAP_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid JOURNEYMAP_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        // JOURNEYMAP_FILTER
        if let Ok(filter_str) = env::var("JOURNEYMAP_FILTER") {
            match filter_str.parse::<FilterType>() {
                Ok(filter) => self.default_filter.update(filter, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid JOURNEYMAP_FILTER value '{}': expected all, education, work, conference, or travel",
                    filter_str
                ),
            }
        }

        // JOURNEYMAP_ZOOM
        if let Ok(zoom_str) = env::var("JOURNEYMAP_ZOOM") {
            match zoom_str.parse::<f64>() {
                Ok(zoom) if zoom.is_finite() => {
                    self.initial_zoom.update(clamp_zoom(zoom), ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid JOURNEYMAP_ZOOM value '{}': expected a number",
                    zoom_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_path) = overrides.data_path {
            self.data_path.update(data_path, ConfigSource::Cli);
        }

        if let Some(validity) = overrides.validity {
            self.validity.update(validity, ConfigSource::Cli);
        }

        if let Some(filter) = overrides.default_filter {
            self.default_filter.update(filter, ConfigSource::Cli);
        }

        if let Some(zoom) = overrides.initial_zoom {
            self.initial_zoom.update(clamp_zoom(zoom), ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_path".to_string(),
            (self.data_path.value.display().to_string(), self.data_path.source),
        );

        map.insert(
            "validity".to_string(),
            (format!("{:?}", self.validity.value), self.validity.source),
        );

        map.insert(
            "default_filter".to_string(),
            (self.default_filter.value.to_string(), self.default_filter.source),
        );

        map.insert(
            "initial_zoom".to_string(),
            (format!("{:.1}", self.initial_zoom.value), self.initial_zoom.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_path: Option<PathBuf>,
    validity: Option<String>,
    default_filter: Option<String>,
    initial_zoom: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub validity: Option<ValidityMode>,
    pub default_filter: Option<FilterType>,
    pub initial_zoom: Option<f64>,
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(JourneyError::ConfigInvalid {
            key: "validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}
