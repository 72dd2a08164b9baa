use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use almanac_business::WeekendPolicy;
use almanac_calendar::WeekStart;
use almanac_distance::DistanceOptions;

/// Top-level Almanac configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Zone used for instants given without an offset, and for "now".
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Distance formatting flags.
    #[serde(default)]
    pub distance: DistanceOptions,

    /// Business-day settings.
    #[serde(default)]
    pub business: BusinessToml,

    /// Interval enumeration settings.
    #[serde(default)]
    pub each: EachToml,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            distance: DistanceOptions::default(),
            business: BusinessToml::default(),
            each: EachToml::default(),
        }
    }
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BusinessToml {
    #[serde(default)]
    pub weekend_policy: WeekendPolicy,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EachToml {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for EachToml {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    1000
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let Some(path) = path else {
        return Ok(AlmanacConfig::default());
    };
    info!(path = %path.display(), "reading configuration");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
