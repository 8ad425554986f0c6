//! Configuration loading and management

use crate::core::date::{DEFAULT_DATE_FORMAT, DEFAULT_FALLBACK};
use crate::core::error::{ConfigError, Result};
use crate::weather::DEFAULT_LOCATION;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How dates are rendered in lists and cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono strftime pattern (e.g., `%b %d, %Y`)
    pub date_format: String,

    /// Text shown for missing or unparseable dates
    pub fallback: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

/// Dashboard widget sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardLimits {
    pub upcoming_tasks: usize,
    pub recent_transactions: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            upcoming_tasks: 5,
            recent_transactions: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub location: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// JSON fixture files (arrays of wire records) used to seed in-memory stores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub farms: Option<PathBuf>,
    pub crops: Option<PathBuf>,
    pub tasks: Option<PathBuf>,
    pub transactions: Option<PathBuf>,
    pub equipment: Option<PathBuf>,
}

impl SeedConfig {
    /// Resolve relative fixture paths against `base`
    pub fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.farms,
            &mut self.crops,
            &mut self.tasks,
            &mut self.transactions,
            &mut self.equipment,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Complete configuration for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub dashboard: DashboardLimits,
    pub weather: WeatherConfig,
    pub seed: SeedConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    ///
    /// Relative seed paths are resolved against the file's directory.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        if let Some(dir) = path.parent() {
            config.seed.resolve_against(dir);
        }
        config.validate()?;

        tracing::info!(path = %path.display(), "loaded dashboard configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Reject values that would only fail later at render time
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "display.date_format".to_string(),
                message: format!("'{}' is not a valid strftime pattern", self.display.date_format),
            }
            .into());
        }

        if self.weather.location.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "weather.location".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
