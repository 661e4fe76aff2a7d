use dioxus::prelude::*;

use super::bar::render_value_axis;
use super::scale::{category_color, LinearScale, PointScale, SqrtScale};
use super::tooltip::hover_handlers;
use super::{coord, domain_max, value_ticks, year_ticks, ChartFrame, Tick, Tooltip};
use crate::core::aggregate::GenrePopularity;
use crate::core::format::format_popularity;
use crate::core::scene::{SceneDescriptor, SceneId, YEAR_MAX, YEAR_MIN};
use crate::i18n;

const RADIUS_RANGE: (f64, f64) = (2.0, 20.0);
const YEAR_TICK_COUNT: usize = 5;
const Y_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleMark {
    pub genre: String,
    pub popularity: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: &'static str,
    pub tooltip: String,
}

/// Genre popularity bubbles for a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleChart {
    pub frame: ChartFrame,
    /// Title and axis-title message ids.
    pub labels: SceneDescriptor,
    pub year: i32,
    pub bubbles: Vec<BubbleMark>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl BubbleChart {
    /// `palette` lists every genre of the dataset; a genre keeps the same
    /// colour whichever year is shown.
    pub fn build(genres: &[GenrePopularity], palette: &[String], year: i32, frame: ChartFrame) -> Self {
        let width = frame.inner_width();
        let height = frame.inner_height();
        let max = domain_max(genres.iter().map(|g| g.popularity));

        let years = LinearScale::new((YEAR_MIN as f64, YEAR_MAX as f64), (0.0, width));
        let y = LinearScale::new((0.0, max), (height, 0.0));
        let radius = SqrtScale::new((0.0, max), RADIUS_RANGE);
        let x = PointScale::new(
            genres.len(),
            (frame.margin.left, width - frame.margin.right),
        );

        let bubbles = genres
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let slot = palette
                    .iter()
                    .position(|genre| genre == &entry.genre)
                    .unwrap_or(index);
                BubbleMark {
                    genre: entry.genre.clone(),
                    popularity: entry.popularity,
                    cx: x.position(index),
                    cy: y.apply(entry.popularity),
                    r: radius.apply(entry.popularity),
                    color: category_color(slot),
                    tooltip: format!("{}: {}", entry.genre, format_popularity(entry.popularity)),
                }
            })
            .collect();

        Self {
            frame,
            labels: *SceneId::Genres.descriptor(),
            year,
            bubbles,
            x_ticks: year_ticks(&years, YEAR_TICK_COUNT),
            y_ticks: value_ticks(&y, Y_TICK_COUNT),
        }
    }
}

#[component]
pub fn BubbleChartView(chart: BubbleChart, tooltip: Signal<Tooltip>) -> Element {
    let frame = chart.frame;
    let width = frame.inner_width();
    let height = frame.inner_height();
    let title = i18n::lookup(chart.labels.title_key);
    let x_label = i18n::lookup(chart.labels.x_axis_key);
    let y_label = i18n::lookup(chart.labels.y_axis_key);

    rsx! {
        svg {
            class: "scene-chart scene-chart--bubble",
            view_box: "{frame.view_box()}",
            "preserveAspectRatio": "xMidYMid meet",

            text { class: "scene-chart__title", x: "50%", y: "50", "text-anchor": "middle", "{title}" }

            g { transform: "{frame.plot_transform()}",
                for bubble in chart.bubbles.iter() {
                    {
                        let (enter, leave) = hover_handlers(tooltip, bubble.tooltip.clone());
                        rsx! {
                            circle {
                                key: "{bubble.genre}",
                                class: "dot",
                                cx: "{coord(bubble.cx)}",
                                cy: "{coord(bubble.cy)}",
                                r: "{coord(bubble.r)}",
                                fill: bubble.color,
                                onmouseenter: enter,
                                onmouseleave: leave,
                            }
                        }
                    }
                }

                g { class: "axis axis--x", transform: "translate(0,{height})",
                    line { class: "axis__domain", x1: "0", x2: "{width}", y1: "0", y2: "0" }
                    for tick in chart.x_ticks.iter() {
                        g { key: "{tick.label}", transform: "translate({coord(tick.offset)},0)",
                            line { class: "axis__tick", y2: "6" }
                            text { class: "axis__label", y: "9", dy: "0.71em", "text-anchor": "middle", "{tick.label}" }
                        }
                    }
                }

                {render_value_axis(&chart.y_ticks, height)}

                text {
                    class: "axis-title",
                    "text-anchor": "middle",
                    transform: "translate({width / 2.0},{height + frame.margin.bottom / 2.0 + 10.0})",
                    "{x_label}"
                }
                text {
                    class: "axis-title",
                    "text-anchor": "middle",
                    transform: "translate(-{frame.margin.left / 2.0},{height / 2.0})rotate(-90)",
                    "{y_label}"
                }
            }
        }
    }
}
