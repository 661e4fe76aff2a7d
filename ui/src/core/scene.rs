//! Scene registry and the view-state machine driving the dashboard.
//!
//! All mutation goes through [`reduce`], a pure function of the previous
//! [`ViewState`] and one [`DashboardEvent`]. The view applies it inside its
//! event loop and re-renders from the result.

use super::aggregate::ALL_GENRES;
use super::streams::ALL_COUNTRIES;

pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2020;

/// Static description of one scene. The `*_key` fields are message ids of the
/// localized title and axis titles drawn by the scene's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDescriptor {
    pub title: &'static str,
    pub key: &'static str,
    pub title_key: &'static str,
    pub x_axis_key: &'static str,
    pub y_axis_key: &'static str,
}

pub const SCENES: [SceneDescriptor; 3] = [
    SceneDescriptor {
        title: "Most Popular Artists",
        key: "popularity",
        title_key: "scene-artists-title",
        x_axis_key: "axis-artists",
        y_axis_key: "axis-average-popularity",
    },
    SceneDescriptor {
        title: "Popular Genres Over Time",
        key: "popularity",
        title_key: "scene-genres-title",
        x_axis_key: "axis-year",
        y_axis_key: "axis-popularity",
    },
    SceneDescriptor {
        title: "Streams by Year and Country",
        key: "streams",
        title_key: "scene-streams-title",
        x_axis_key: "axis-year",
        y_axis_key: "axis-streams",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneId {
    /// Bar chart of top artists per genre.
    #[default]
    Artists,
    /// Bubble chart of genre popularity for one year.
    Genres,
    /// Line chart of streams per year.
    Streams,
}

impl SceneId {
    pub const ALL: [SceneId; 3] = [SceneId::Artists, SceneId::Genres, SceneId::Streams];

    pub fn index(self) -> usize {
        match self {
            SceneId::Artists => 0,
            SceneId::Genres => 1,
            SceneId::Streams => 2,
        }
    }

    pub fn descriptor(self) -> &'static SceneDescriptor {
        &SCENES[self.index()]
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub scene: SceneId,
    /// Title slide dismissed.
    pub started: bool,
    pub current_year: i32,
    pub selected_genre: String,
    pub selected_country: String,
}

impl ViewState {
    pub fn new(initial_year: i32) -> Self {
        Self {
            scene: SceneId::default(),
            started: false,
            current_year: initial_year.clamp(YEAR_MIN, YEAR_MAX),
            selected_genre: ALL_GENRES.to_string(),
            selected_country: ALL_COUNTRIES.to_string(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(YEAR_MIN)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Start,
    Next,
    Prev,
    SelectGenre(String),
    SetYear(i32),
    SelectCountry(String),
}

pub fn reduce(state: &ViewState, event: DashboardEvent) -> ViewState {
    let mut next = state.clone();
    match event {
        DashboardEvent::Start => next.started = true,
        DashboardEvent::Next => {
            if let Some(scene) = state.scene.next() {
                next.scene = scene;
            }
        }
        DashboardEvent::Prev => {
            if let Some(scene) = state.scene.prev() {
                next.scene = scene;
            }
        }
        DashboardEvent::SelectGenre(genre) => next.selected_genre = genre,
        DashboardEvent::SetYear(year) => next.current_year = year.clamp(YEAR_MIN, YEAR_MAX),
        DashboardEvent::SelectCountry(country) => next.selected_country = country,
    }
    next
}

/// Which scene-specific controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
    pub filter: bool,
    pub genre_select: bool,
    pub country_select: bool,
    pub year_slider: bool,
}

impl ControlVisibility {
    pub fn for_scene(scene: SceneId) -> Self {
        match scene {
            SceneId::Artists => Self {
                filter: true,
                genre_select: true,
                country_select: false,
                year_slider: false,
            },
            SceneId::Genres => Self {
                filter: false,
                genre_select: false,
                country_select: false,
                year_slider: true,
            },
            SceneId::Streams => Self {
                filter: true,
                genre_select: true,
                country_select: true,
                year_slider: false,
            },
        }
    }
}
