//! Dataset records and the loader that fetches and parses them.
//!
//! Both inputs are comma-delimited text with a header row. Columns beyond the
//! ones we read are ignored. A popularity or year cell that is empty or not a
//! finite number (including `NaN` and `inf`) becomes `None`; the row is kept
//! and the aggregations skip it.

use futures_util::future::try_join;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use tracing::{debug, info, warn};

use super::aggregate::{distinct, genre_options};
use super::config::DataSources;
use super::error::{LoadError, LoadResult};
use super::platform::{self, Platform};
use super::streams::{self, CountrySeries, StreamPoint};

/// One row of the track metadata dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackRecord {
    pub artist_name: String,
    pub genre: String,
    #[serde(deserialize_with = "finite_option")]
    pub popularity: Option<f64>,
}

/// One row of the year-tagged genre dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenreYearRecord {
    pub genre: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "finite_option")]
    pub popularity: Option<f64>,
}

/// `csv::invalid_option`, additionally rejecting `NaN` and infinities, which
/// parse as valid floats.
fn finite_option<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    csv::invalid_option(de).map(|value: Option<f64>| value.filter(|v| v.is_finite()))
}

const TRACKS: &str = "track";
const GENRE_YEARS: &str = "genre-year";

pub fn parse_tracks(text: &str) -> LoadResult<Vec<TrackRecord>> {
    parse_records(text, TRACKS, &["artist_name", "genre", "popularity"])
}

pub fn parse_genre_years(text: &str) -> LoadResult<Vec<GenreYearRecord>> {
    parse_records(text, GENRE_YEARS, &["genre", "year", "popularity"])
}

fn parse_records<T: DeserializeOwned>(
    text: &str,
    dataset: &'static str,
    required: &[&str],
) -> LoadResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| LoadError::Header {
            dataset,
            reason: err.to_string(),
        })?
        .clone();

    if let Some(missing) = required
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(LoadError::Header {
            dataset,
            reason: format!("missing column `{missing}`"),
        });
    }

    reader
        .deserialize()
        .enumerate()
        .map(|(index, record)| {
            record.map_err(|err| LoadError::Parse {
                dataset,
                row: index as u64 + 1,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Everything the scenes draw from. Built once after both datasets load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub tracks: Vec<TrackRecord>,
    pub genre_years: Vec<GenreYearRecord>,
    pub streams: Vec<CountrySeries>,
    /// Dropdown options: `all` followed by the track genres.
    pub genres: Vec<String>,
    /// Genres of the year-tagged dataset; a genre's position picks its colour.
    pub bubble_genres: Vec<String>,
    pub total_streams: Vec<StreamPoint>,
}

impl DashboardData {
    pub fn new(tracks: Vec<TrackRecord>, genre_years: Vec<GenreYearRecord>) -> Self {
        let streams = streams::country_series().to_vec();
        let total_streams = streams::total_streams(&streams);
        let genres = genre_options(&tracks);
        let bubble_genres = distinct(genre_years.iter().map(|row| row.genre.as_str()));

        Self {
            tracks,
            genre_years,
            streams,
            genres,
            bubble_genres,
            total_streams,
        }
    }

    /// Country names for the stream scene dropdown, `All` first.
    pub fn country_options(&self) -> Vec<String> {
        std::iter::once(streams::ALL_COUNTRIES.to_string())
            .chain(self.streams.iter().map(|series| series.country.clone()))
            .collect()
    }

    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.genre_years.iter().filter_map(|row| row.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Fetch and parse both datasets. Either failure aborts the whole load.
pub async fn load(sources: &DataSources) -> LoadResult<DashboardData> {
    info!(
        platform = Platform::current().label(),
        tracks = %sources.tracks,
        genre_years = %sources.genre_years,
        "loading datasets"
    );

    let (tracks_text, genre_text) = try_join(
        platform::fetch_text(&sources.tracks),
        platform::fetch_text(&sources.genre_years),
    )
    .await?;

    let tracks = parse_tracks(&tracks_text)?;
    let genre_years = parse_genre_years(&genre_text)?;

    let unusable_tracks = tracks.iter().filter(|row| row.popularity.is_none()).count();
    let unusable_genre_rows = genre_years
        .iter()
        .filter(|row| row.popularity.is_none() || row.year.is_none())
        .count();
    if unusable_tracks + unusable_genre_rows > 0 {
        warn!(
            unusable_tracks,
            unusable_genre_rows, "rows without numeric popularity/year will be skipped"
        );
    }

    let data = DashboardData::new(tracks, genre_years);
    if let Some((first, last)) = data.year_span() {
        debug!(first, last, "genre-year dataset span");
    }
    info!(
        tracks = data.tracks.len(),
        genre_years = data.genre_years.len(),
        genres = data.genres.len() - 1,
        "datasets ready"
    );

    Ok(data)
}
