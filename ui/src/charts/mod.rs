//! Chart models and their SVG views.
//!
//! Each scene's chart is built as a plain value (marks, ticks, geometry) from
//! aggregated data and a [`ChartFrame`], then handed to a [`ChartSurface`].
//! Building never touches the DOM, so the models are tested directly.

mod bar;
pub use bar::{BarChart, BarChartView, BarMark};

mod bubble;
pub use bubble::{BubbleChart, BubbleChartView, BubbleMark};

mod line;
pub use line::{LineChart, LineChartView, LinePoint};

pub mod scale;

mod surface;
pub use surface::{ChartSurface, ElementSurface, SceneFrame};

mod tooltip;
pub use tooltip::{Tooltip, TooltipView};

use scale::LinearScale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer SVG size and the margins reserved for title and axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    /// Frame shared by the bar and bubble scenes.
    pub const fn standard() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margin {
                top: 60.0,
                right: 30.0,
                bottom: 90.0,
                left: 60.0,
            },
        }
    }

    /// The line scene has no rotated labels and needs less room below.
    pub const fn line() -> Self {
        let mut frame = Self::standard();
        frame.margin.bottom = 60.0;
        frame
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }
}

/// One labelled position along an axis, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

pub(crate) fn value_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let precision = scale.tick_precision(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            offset: scale.apply(value),
            label: format!("{value:.precision$}"),
        })
        .collect()
}

pub(crate) fn year_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|year| Tick {
            offset: scale.apply(year),
            label: format!("{year:.0}"),
        })
        .collect()
}

/// Upper end of a `[0, max]` domain.
pub(crate) fn domain_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// Coordinates rounded for compact SVG attributes.
pub(crate) fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
