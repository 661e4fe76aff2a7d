use dioxus::prelude::*;

use super::bar::render_value_axis;
use super::scale::{category_color, LinearScale};
use super::tooltip::hover_handlers;
use super::{coord, domain_max, value_ticks, year_ticks, ChartFrame, Tick, Tooltip};
use crate::core::format::format_value;
use crate::core::scene::{SceneDescriptor, SceneId};
use crate::core::streams::{CountrySeries, TOTAL_SERIES};
use crate::i18n;

const X_DOMAIN: (f64, f64) = (2014.0, 2023.0);
const POINT_RADIUS: f64 = 5.0;
const TICK_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    pub value: f64,
    pub cx: f64,
    pub cy: f64,
    pub tooltip: String,
}

/// Streams-per-year line for one country or the total.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub frame: ChartFrame,
    /// Title and axis-title message ids.
    pub labels: SceneDescriptor,
    pub country: String,
    pub color: &'static str,
    /// SVG path data through every point, empty when there are none.
    pub path: String,
    pub points: Vec<LinePoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl LineChart {
    /// `countries` is the fixed country list; the total takes the first
    /// palette colour and each country the next one along.
    pub fn build(series: &CountrySeries, countries: &[CountrySeries], frame: ChartFrame) -> Self {
        let width = frame.inner_width();
        let height = frame.inner_height();

        let x = LinearScale::new(X_DOMAIN, (0.0, width));
        let y = LinearScale::new(
            (0.0, domain_max(series.streams.iter().map(|p| p.value))),
            (height, 0.0),
        );

        let points: Vec<LinePoint> = series
            .streams
            .iter()
            .map(|point| LinePoint {
                year: point.year,
                value: point.value,
                cx: x.apply(point.year as f64),
                cy: y.apply(point.value),
                tooltip: format!(
                    "{}\n{}: {} million streams",
                    series.country,
                    point.year,
                    format_value(point.value)
                ),
            })
            .collect();

        Self {
            frame,
            labels: *SceneId::Streams.descriptor(),
            country: series.country.clone(),
            color: series_color(&series.country, countries),
            path: path_data(&points),
            points,
            x_ticks: year_ticks(&x, TICK_COUNT),
            y_ticks: value_ticks(&y, TICK_COUNT),
        }
    }

    /// Axes only, for a country outside the fixed list.
    pub fn empty(frame: ChartFrame) -> Self {
        Self::build(
            &CountrySeries {
                country: String::new(),
                streams: Vec::new(),
            },
            &[],
            frame,
        )
    }
}

fn series_color(country: &str, countries: &[CountrySeries]) -> &'static str {
    if country == TOTAL_SERIES {
        return category_color(0);
    }
    let slot = countries
        .iter()
        .position(|series| series.country == country)
        .map_or(0, |index| index + 1);
    category_color(slot)
}

fn path_data(points: &[LinePoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command}{},{}", coord(p.cx), coord(p.cy))
        })
        .collect()
}

#[component]
pub fn LineChartView(chart: LineChart, tooltip: Signal<Tooltip>) -> Element {
    let frame = chart.frame;
    let width = frame.inner_width();
    let height = frame.inner_height();
    let title = i18n::lookup(chart.labels.title_key);
    let x_label = i18n::lookup(chart.labels.x_axis_key);
    let y_label = i18n::lookup(chart.labels.y_axis_key);

    rsx! {
        svg {
            class: "scene-chart scene-chart--line",
            view_box: "{frame.view_box()}",
            "preserveAspectRatio": "xMidYMid meet",

            text { class: "scene-chart__title", x: "50%", y: "50", "text-anchor": "middle", "{title}" }

            g { transform: "{frame.plot_transform()}",
                if !chart.path.is_empty() {
                    path {
                        class: "line",
                        d: "{chart.path}",
                        fill: "none",
                        stroke: chart.color,
                        "stroke-width": "2",
                    }
                }

                for point in chart.points.iter() {
                    {
                        let (enter, leave) = hover_handlers(tooltip, point.tooltip.clone());
                        rsx! {
                            circle {
                                key: "{point.year}",
                                class: "dot",
                                cx: "{coord(point.cx)}",
                                cy: "{coord(point.cy)}",
                                r: "{POINT_RADIUS}",
                                fill: chart.color,
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
                    transform: "translate({width / 2.0},{height + frame.margin.bottom - 10.0})",
                    "{x_label}"
                }
                text {
                    class: "axis-title",
                    "text-anchor": "middle",
                    transform: "translate(-{frame.margin.left - 10.0},{height / 2.0})rotate(-90)",
                    "{y_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::streams::{country_series, series_for_country, total_streams, ALL_COUNTRIES};

    #[test]
    fn total_series_peaks_at_top() {
        let countries = country_series();
        let total = total_streams(countries);
        let series = series_for_country(countries, &total, ALL_COUNTRIES).unwrap();
        let chart = LineChart::build(&series, countries, ChartFrame::line());

        assert_eq!(chart.points.len(), 10);
        assert_eq!(chart.points[0].cx, 0.0);
        assert_eq!(chart.points[9].cy, 0.0);
        assert_eq!(chart.color, category_color(0));
        assert!(chart.path.starts_with("M0,"));
        assert_eq!(chart.path.matches('L').count(), 9);
        assert_eq!(chart.points[9].tooltip, "Total\n2023: 575 million streams");
    }

    #[test]
    fn countries_get_distinct_colours() {
        let countries = country_series();
        let mexico = LineChart::build(&countries[2], countries, ChartFrame::line());
        assert_eq!(mexico.color, category_color(3));
        assert_eq!(mexico.points[0].tooltip, "Mexico\n2014: 2 million streams");
    }

    #[test]
    fn empty_chart_keeps_axes() {
        let chart = LineChart::empty(ChartFrame::line());
        assert!(chart.points.is_empty());
        assert!(chart.path.is_empty());
        assert_eq!(chart.x_ticks.len(), 10);
    }
}
