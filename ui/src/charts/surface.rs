use dioxus::prelude::*;
use tracing::warn;

use super::{BarChart, BarChartView, BubbleChart, BubbleChartView, ChartFrame, LineChart, LineChartView, Tooltip};
use crate::core::aggregate::{genre_popularity_by_year, top_artists_by_genre};
use crate::core::dataset::DashboardData;
use crate::core::scene::{SceneId, ViewState};
use crate::core::streams::series_for_country;

/// Something a scene can be drawn onto. Every call replaces whatever the
/// surface showed before, so redrawing never leaves stale marks behind.
pub trait ChartSurface {
    fn draw_bars(&mut self, chart: &BarChart);
    fn draw_bubbles(&mut self, chart: &BubbleChart);
    fn draw_line(&mut self, chart: &LineChart);
}

/// Render input for the active scene, derived from view state and data.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneFrame {
    Bars(BarChart),
    Bubbles(BubbleChart),
    Line(LineChart),
}

impl SceneFrame {
    pub fn build(state: &ViewState, data: &DashboardData) -> Self {
        match state.scene {
            SceneId::Artists => {
                let artists = top_artists_by_genre(&data.tracks, &state.selected_genre);
                Self::Bars(BarChart::build(&artists, ChartFrame::standard()))
            }
            SceneId::Genres => {
                let genres = genre_popularity_by_year(&data.genre_years, state.current_year);
                Self::Bubbles(BubbleChart::build(
                    &genres,
                    &data.bubble_genres,
                    state.current_year,
                    ChartFrame::standard(),
                ))
            }
            SceneId::Streams => {
                let series = series_for_country(
                    &data.streams,
                    &data.total_streams,
                    &state.selected_country,
                );
                let chart = match series {
                    Some(series) => LineChart::build(&series, &data.streams, ChartFrame::line()),
                    None => {
                        warn!(country = %state.selected_country, "no stream series for country");
                        LineChart::empty(ChartFrame::line())
                    }
                };
                Self::Line(chart)
            }
        }
    }

    pub fn draw(&self, surface: &mut impl ChartSurface) {
        match self {
            Self::Bars(chart) => surface.draw_bars(chart),
            Self::Bubbles(chart) => surface.draw_bubbles(chart),
            Self::Line(chart) => surface.draw_line(chart),
        }
    }
}

/// Surface producing the Dioxus element for the scene container.
pub struct ElementSurface {
    tooltip: Signal<Tooltip>,
    rendered: Option<Element>,
}

impl ElementSurface {
    pub fn new(tooltip: Signal<Tooltip>) -> Self {
        Self {
            tooltip,
            rendered: None,
        }
    }

    pub fn into_element(self) -> Element {
        self.rendered.unwrap_or_else(|| rsx! {})
    }
}

impl ChartSurface for ElementSurface {
    fn draw_bars(&mut self, chart: &BarChart) {
        let tooltip = self.tooltip;
        self.rendered = Some(rsx! {
            BarChartView { chart: chart.clone(), tooltip }
        });
    }

    fn draw_bubbles(&mut self, chart: &BubbleChart) {
        let tooltip = self.tooltip;
        self.rendered = Some(rsx! {
            BubbleChartView { chart: chart.clone(), tooltip }
        });
    }

    fn draw_line(&mut self, chart: &LineChart) {
        let tooltip = self.tooltip;
        self.rendered = Some(rsx! {
            LineChartView { chart: chart.clone(), tooltip }
        });
    }
}
