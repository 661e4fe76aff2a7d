//! Formatting helpers for tooltips and labels.

pub fn format_popularity(value: f64) -> String {
    format!("{value:.2}")
}

/// Whole numbers print without a fractional part (`160`, not `160.0`).
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
