use dioxus::prelude::*;

use super::scale::{BandScale, LinearScale};
use super::tooltip::hover_handlers;
use super::{coord, domain_max, value_ticks, ChartFrame, Tick, Tooltip};
use crate::core::aggregate::ArtistPopularity;
use crate::core::format::format_popularity;
use crate::core::scene::{SceneDescriptor, SceneId};
use crate::i18n;

const BAND_PADDING: f64 = 0.1;
const BAR_FILL: &str = "steelblue";
const Y_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub artist: String,
    pub popularity: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: String,
}

/// Top-artists bar chart in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub frame: ChartFrame,
    /// Title and axis-title message ids.
    pub labels: SceneDescriptor,
    pub bars: Vec<BarMark>,
    /// Artist names centred under their bars.
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl BarChart {
    pub fn build(artists: &[ArtistPopularity], frame: ChartFrame) -> Self {
        let width = frame.inner_width();
        let height = frame.inner_height();

        let x = BandScale::new(
            artists.iter().map(|a| a.artist.clone()).collect(),
            (0.0, width),
            BAND_PADDING,
        );
        let y = LinearScale::new(
            (0.0, domain_max(artists.iter().map(|a| a.popularity))),
            (height, 0.0),
        );

        let bars: Vec<BarMark> = artists
            .iter()
            .filter_map(|entry| {
                let left = x.position(&entry.artist)?;
                let top = y.apply(entry.popularity);
                Some(BarMark {
                    artist: entry.artist.clone(),
                    popularity: entry.popularity,
                    x: left,
                    y: top,
                    width: x.bandwidth(),
                    height: height - top,
                    tooltip: format!(
                        "{}: {} million streams",
                        entry.artist,
                        format_popularity(entry.popularity)
                    ),
                })
            })
            .collect();

        let x_ticks = bars
            .iter()
            .map(|bar| Tick {
                offset: bar.x + bar.width / 2.0,
                label: bar.artist.clone(),
            })
            .collect();

        Self {
            frame,
            labels: *SceneId::Artists.descriptor(),
            bars,
            x_ticks,
            y_ticks: value_ticks(&y, Y_TICK_COUNT),
        }
    }
}

#[component]
pub fn BarChartView(chart: BarChart, tooltip: Signal<Tooltip>) -> Element {
    let frame = chart.frame;
    let width = frame.inner_width();
    let height = frame.inner_height();
    let title = i18n::lookup(chart.labels.title_key);
    let x_label = i18n::lookup(chart.labels.x_axis_key);
    let y_label = i18n::lookup(chart.labels.y_axis_key);

    rsx! {
        svg {
            class: "scene-chart scene-chart--bar",
            view_box: "{frame.view_box()}",
            "preserveAspectRatio": "xMidYMid meet",

            text { class: "scene-chart__title", x: "50%", y: "50", "text-anchor": "middle", "{title}" }

            g { transform: "{frame.plot_transform()}",
                for bar in chart.bars.iter() {
                    {
                        let (enter, leave) = hover_handlers(tooltip, bar.tooltip.clone());
                        rsx! {
                            rect {
                                key: "{bar.artist}",
                                class: "bar",
                                x: "{coord(bar.x)}",
                                y: "{coord(bar.y)}",
                                width: "{coord(bar.width)}",
                                height: "{coord(bar.height)}",
                                fill: BAR_FILL,
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
                            text {
                                class: "axis__label",
                                y: "9",
                                dy: "0.71em",
                                transform: "rotate(-45)",
                                "text-anchor": "end",
                                "{tick.label}"
                            }
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

/// Left-hand value axis shared by all three charts.
pub(crate) fn render_value_axis(ticks: &[Tick], height: f64) -> Element {
    rsx! {
        g { class: "axis axis--y",
            line { class: "axis__domain", x1: "0", x2: "0", y1: "0", y2: "{height}" }
            for tick in ticks.iter() {
                g { key: "{tick.label}", transform: "translate(0,{coord(tick.offset)})",
                    line { class: "axis__tick", x2: "-6" }
                    text { class: "axis__label", x: "-9", dy: "0.32em", "text-anchor": "end", "{tick.label}" }
                }
            }
        }
    }
}
