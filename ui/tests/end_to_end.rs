//! Loads the fixture datasets the way the dashboard does and walks the scenes
//! through the reducer, checking what each scene would draw.

use std::path::PathBuf;

use ui::charts::{BarChart, BubbleChart, ChartSurface, LineChart, SceneFrame};
use ui::core::aggregate::{top_artists_by_genre, ALL_GENRES};
use ui::core::config::DataSources;
use ui::core::dataset::{self, parse_genre_years, parse_tracks, DashboardData};
use ui::core::error::LoadError;
use ui::core::scene::{reduce, DashboardEvent, SceneId, ViewState, YEAR_MIN};

const TRACKS: &str = include_str!("fixtures/tracks.csv");
const GENRE_YEARS: &str = include_str!("fixtures/genre_years.csv");

fn fixture_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn fixture_data() -> DashboardData {
    DashboardData::new(
        parse_tracks(TRACKS).expect("tracks fixture parses"),
        parse_genre_years(GENRE_YEARS).expect("genre-year fixture parses"),
    )
}

#[derive(Default)]
struct Recorder {
    bars: Vec<String>,
    bubbles: Vec<String>,
    line: Option<String>,
}

impl ChartSurface for Recorder {
    fn draw_bars(&mut self, chart: &BarChart) {
        self.bars = chart.bars.iter().map(|bar| bar.artist.clone()).collect();
    }

    fn draw_bubbles(&mut self, chart: &BubbleChart) {
        self.bubbles = chart.bubbles.iter().map(|b| b.genre.clone()).collect();
    }

    fn draw_line(&mut self, chart: &LineChart) {
        self.line = Some(chart.country.clone());
    }
}

fn draw(state: &ViewState, data: &DashboardData) -> Recorder {
    let mut surface = Recorder::default();
    SceneFrame::build(state, data).draw(&mut surface);
    surface
}

#[test]
fn initial_scene_shows_highest_mean_artist_first() {
    let data = fixture_data();
    let state = reduce(&ViewState::default(), DashboardEvent::Start);

    assert!(state.started);
    assert_eq!(state.scene, SceneId::Artists);
    assert_eq!(state.selected_genre, ALL_GENRES);

    let top = top_artists_by_genre(&data.tracks, &state.selected_genre);
    assert_eq!(top[0].artist, "Gamma");
    assert_eq!(top[0].popularity, 95.0);

    let drawn = draw(&state, &data);
    assert_eq!(drawn.bars, ["Gamma", "Alpha", "Beta", "Epsilon"]);
}

#[test]
fn genre_options_follow_first_appearance() {
    let data = fixture_data();
    assert_eq!(data.genres, ["all", "Pop", "Rock", "Jazz"]);
    assert_eq!(data.bubble_genres, ["pop", "rock", "hip hop"]);
}

#[test]
fn walking_the_scenes() {
    let data = fixture_data();
    let mut state = reduce(&ViewState::default(), DashboardEvent::Start);

    state = reduce(&state, DashboardEvent::SelectGenre("Pop".into()));
    assert_eq!(draw(&state, &data).bars, ["Alpha", "Beta"]);

    state = reduce(&state, DashboardEvent::Next);
    assert_eq!(state.scene, SceneId::Genres);
    assert_eq!(state.current_year, YEAR_MIN);
    assert_eq!(draw(&state, &data).bubbles, ["pop", "rock"]);

    state = reduce(&state, DashboardEvent::SetYear(2019));
    assert_eq!(draw(&state, &data).bubbles, ["hip hop"]);

    state = reduce(&state, DashboardEvent::SetYear(2015));
    assert!(draw(&state, &data).bubbles.is_empty());

    state = reduce(&state, DashboardEvent::Next);
    assert_eq!(state.scene, SceneId::Streams);
    assert_eq!(draw(&state, &data).line.as_deref(), Some("Total"));

    state = reduce(&state, DashboardEvent::SelectCountry("Brazil".into()));
    assert_eq!(draw(&state, &data).line.as_deref(), Some("Brazil"));

    let last = reduce(&state, DashboardEvent::Next);
    assert_eq!(last, state);
}

#[tokio::test]
async fn loads_fixture_files_from_disk() {
    let sources = DataSources::new(fixture_path("tracks.csv"), fixture_path("genre_years.csv"));
    let data = dataset::load(&sources).await.expect("fixtures load");

    assert_eq!(data, fixture_data());
    assert_eq!(data.year_span(), Some((2000, 2019)));
}

#[tokio::test]
async fn missing_file_fails_the_whole_load() {
    let sources = DataSources::new(fixture_path("tracks.csv"), fixture_path("no_such_file.csv"));
    let err = dataset::load(&sources).await.unwrap_err();

    match err {
        LoadError::Io { location, .. } => assert!(location.ends_with("no_such_file.csv")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[tokio::test]
async fn file_missing_a_column_is_rejected() {
    let path = std::env::temp_dir().join(format!("soundstage-bad-{}.csv", std::process::id()));
    tokio::fs::write(&path, "genre,artist_name\nPop,Alpha\n")
        .await
        .expect("write temp file");

    let sources = DataSources::new(path.to_string_lossy(), fixture_path("genre_years.csv"));
    let result = dataset::load(&sources).await;
    let _ = tokio::fs::remove_file(&path).await;

    assert!(matches!(result, Err(LoadError::Header { dataset: "track", .. })));
}
