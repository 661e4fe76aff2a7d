use dioxus::prelude::*;

/// Pointer offset so the tooltip sits beside the cursor, not under it.
const OFFSET_X: f64 = 5.0;
const OFFSET_Y: f64 = -28.0;

/// Floating hover label shared by every chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Show `label` (newline separated) next to a pointer at page coordinates.
    pub fn show_at(label: &str, page_x: f64, page_y: f64) -> Self {
        Self {
            visible: true,
            left: page_x + OFFSET_X,
            top: page_y + OFFSET_Y,
            lines: label.lines().map(str::to_string).collect(),
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Event handlers for a mark: show `label` on enter, hide on leave.
pub(crate) fn hover_handlers(
    mut tooltip: Signal<Tooltip>,
    label: String,
) -> (impl FnMut(MouseEvent), impl FnMut(MouseEvent)) {
    let enter = move |evt: MouseEvent| {
        let point = evt.data().page_coordinates();
        tooltip.set(Tooltip::show_at(&label, point.x, point.y));
    };
    let leave = move |_: MouseEvent| tooltip.with_mut(Tooltip::hide);
    (enter, leave)
}

#[component]
pub fn TooltipView(tooltip: Signal<Tooltip>) -> Element {
    let state = tooltip();
    let class = if state.visible {
        "chart-tooltip"
    } else {
        "chart-tooltip chart-tooltip--hidden"
    };

    rsx! {
        div {
            class: "{class}",
            role: "tooltip",
            style: "left: {state.left}px; top: {state.top}px;",
            for (idx, line) in state.lines.iter().enumerate() {
                div { key: "{idx}", class: "chart-tooltip__line", "{line}" }
            }
        }
    }
}
