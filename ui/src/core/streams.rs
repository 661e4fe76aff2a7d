//! Synthetic streams-by-country series and the derived total.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Country dropdown value selecting the summed series.
pub const ALL_COUNTRIES: &str = "All";

/// Name given to the summed series.
pub const TOTAL_SERIES: &str = "Total";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StreamPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountrySeries {
    pub country: String,
    pub streams: Vec<StreamPoint>,
}

const STREAMS_JSON: &str = include_str!("../../assets/data/streams.json");

static COUNTRY_SERIES: Lazy<Vec<CountrySeries>> = Lazy::new(|| {
    serde_json::from_str(STREAMS_JSON).expect("embedded streams.json is valid")
});

/// The fixed per-country series, in dropdown order.
pub fn country_series() -> &'static [CountrySeries] {
    &COUNTRY_SERIES
}

/// Sum every series at each year of the first one. A year absent from a
/// series contributes nothing.
pub fn total_streams(series: &[CountrySeries]) -> Vec<StreamPoint> {
    let Some(reference) = series.first() else {
        return Vec::new();
    };

    reference
        .streams
        .iter()
        .map(|point| StreamPoint {
            year: point.year,
            value: series
                .iter()
                .filter_map(|s| s.streams.iter().find(|p| p.year == point.year))
                .map(|p| p.value)
                .sum(),
        })
        .collect()
}

/// Series to plot for a dropdown value: the total for [`ALL_COUNTRIES`],
/// otherwise the named country. `None` for a name outside the fixed list.
pub fn series_for_country(
    series: &[CountrySeries],
    total: &[StreamPoint],
    country: &str,
) -> Option<CountrySeries> {
    if country == ALL_COUNTRIES {
        return Some(CountrySeries {
            country: TOTAL_SERIES.to_string(),
            streams: total.to_vec(),
        });
    }
    series.iter().find(|s| s.country == country).cloned()
}
