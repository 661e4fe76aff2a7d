//! Runtime configuration supplied by each platform launcher.

use serde::Deserialize;

use super::scene::{YEAR_MAX, YEAR_MIN};

/// Locations of the two input datasets. On the web these are URLs relative to
/// the page; natively they are file paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSources {
    pub tracks: String,
    pub genre_years: String,
}

impl DataSources {
    pub fn new(tracks: impl Into<String>, genre_years: impl Into<String>) -> Self {
        Self {
            tracks: tracks.into(),
            genre_years: genre_years.into(),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::new("data/SpotifyFeatures.csv", "data/songs_normalize.csv")
    }
}

/// Dashboard configuration, provided to the view tree through context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: DataSources,
    /// Year the bubble scene opens on.
    pub initial_year: i32,
}

impl DashboardConfig {
    pub fn with_sources(sources: DataSources) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// Parse an override file. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.initial_year = config.initial_year.clamp(YEAR_MIN, YEAR_MAX);
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sources: DataSources::default(),
            initial_year: YEAR_MIN,
        }
    }
}
