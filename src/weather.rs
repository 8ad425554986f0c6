//! Read-only weather reports for the dashboard widget

use crate::core::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location used when a caller passes none
pub const DEFAULT_LOCATION: &str = "Sacramento, CA";

/// Conditions right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Fahrenheit
    pub temperature: i32,
    pub condition: String,
    /// Icon name understood by the UI (`CloudSun`, `Sun`, ...)
    pub icon: String,
    /// Percent
    pub humidity: u8,
    /// Miles per hour
    pub wind_speed: u16,
    /// Chance of rain, percent
    pub precipitation: u8,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub icon: String,
}

impl ForecastDay {
    fn new(day: &str, high: i32, low: i32, condition: &str, icon: &str) -> Self {
        Self {
            day: day.to_string(),
            high,
            low,
            condition: condition.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Current conditions plus a five-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub last_updated: DateTime<Utc>,
}

/// Source of weather reports
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Report for `location`, or for the provider's default when `None`
    async fn current(&self, location: Option<&str>) -> Result<WeatherReport>;
}

/// Provider returning a fixed report, stamped with the time of the call
#[derive(Debug, Clone)]
pub struct StaticWeatherProvider {
    default_location: String,
}

impl StaticWeatherProvider {
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            default_location: default_location.into(),
        }
    }

    fn report(&self, location: &str, now: DateTime<Utc>) -> WeatherReport {
        WeatherReport {
            location: location.to_string(),
            current: CurrentConditions {
                temperature: 72,
                condition: "Partly Cloudy".to_string(),
                icon: "CloudSun".to_string(),
                humidity: 65,
                wind_speed: 12,
                precipitation: 0,
            },
            forecast: vec![
                ForecastDay::new("Today", 75, 58, "Partly Cloudy", "CloudSun"),
                ForecastDay::new("Tomorrow", 78, 61, "Sunny", "Sun"),
                ForecastDay::new("Wednesday", 73, 59, "Cloudy", "Cloud"),
                ForecastDay::new("Thursday", 70, 56, "Rain", "CloudRain"),
                ForecastDay::new("Friday", 72, 58, "Partly Cloudy", "CloudSun"),
            ],
            last_updated: now,
        }
    }
}

impl Default for StaticWeatherProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn current(&self, location: Option<&str>) -> Result<WeatherReport> {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_location.as_str());
        tracing::debug!(location, "serving static weather report");
        Ok(self.report(location, Utc::now()))
    }
}
