//! Minimal d3-style scales: linear, sqrt, band and point, plus tick
//! generation on 1/2/5 steps.

/// d3's `schemeCategory10`.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub fn category_color(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(self.range, normalize(self.domain, value))
    }

    /// Roughly `count` round values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Decimal places needed to print the ticks produced for `count`.
    pub fn tick_precision(&self, count: usize) -> usize {
        let step = tick_step(self.domain.0, self.domain.1, count).abs();
        if step == 0.0 || !step.is_finite() {
            return 0;
        }
        (-step.log10().floor()).max(0.0) as usize
    }
}

/// Square-root scale, used for bubble radii so area tracks the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let root = |v: f64| v.signum() * v.abs().sqrt();
        let domain = (root(self.domain.0), root(self.domain.1));
        interpolate(self.range, normalize(domain, root(value)))
    }
}

/// Ordinal scale with evenly sized bands, `padding` applied inside and
/// outside the bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = range.0 + (span - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|candidate| candidate == key)
            .map(|index| self.start + self.step * index as f64)
    }
}

/// Ordinal scale placing points evenly across the range, centred when there
/// is only one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    start: f64,
    step: f64,
}

impl PointScale {
    pub fn new(len: usize, range: (f64, f64)) -> Self {
        let gaps = len.saturating_sub(1) as f64;
        let span = range.1 - range.0;
        let step = span / gaps.max(1.0);
        Self {
            start: range.0 + (span - step * gaps) * 0.5,
            step,
        }
    }

    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }
}

fn normalize(domain: (f64, f64), value: f64) -> f64 {
    let span = domain.1 - domain.0;
    if span == 0.0 || !span.is_finite() {
        0.5
    } else {
        (value - domain.0) / span
    }
}

fn interpolate(range: (f64, f64), t: f64) -> f64 {
    range.0 + (range.1 - range.0) * t
}

/// Signed increment: positive is a multiplier, negative is an inverse (for
/// steps below one, to avoid accumulating float error).
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if lo == hi || count == 0 {
        return 0.0;
    }
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 {
        -1.0 / inc
    } else {
        inc
    }
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 || !inc.is_finite() {
        return Vec::new();
    }

    let mut values: Vec<f64> = if inc > 0.0 {
        let i1 = (lo / inc).ceil() as i64;
        let i2 = (hi / inc).floor() as i64;
        (i1..=i2).map(|i| i as f64 * inc).collect()
    } else {
        let inv = -inc;
        let i1 = (lo * inv).ceil() as i64;
        let i2 = (hi * inv).floor() as i64;
        (i1..=i2).map(|i| i as f64 / inv).collect()
    };

    if reverse {
        values.reverse();
    }
    values
}
