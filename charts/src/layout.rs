//! Layout: pure geometry for every chart kind.
//!
//! Nothing here touches the browser. [`crate::render`] asks this module where
//! things go and only then issues drawing calls, which keeps the arithmetic
//! testable on the host.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::{ChartConfig, ChartKind, Dataset, ScalePosition};
use crate::consts::{
    AXIS_GUTTER_PX, BAR_FILL, BAR_GROUP_FILL, CATEGORY_GUTTER_PX, LEGEND_HEIGHT_PX, OUTER_PADDING_PX, START_ANGLE, TAU,
};

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
}

/// One bar of a grouped bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub dataset: usize,
    pub index: usize,
    pub rect: Rect,
}

/// One donut slice, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub start: f64,
    pub end: f64,
}

impl Arc {
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.start + self.end) * 0.5
    }
}

// =============================================================
// Scales
// =============================================================

/// Round `value` up to the next 1, 2, or 5 times a power of ten.
///
/// Non-positive and non-finite inputs yield `1.0` so a scale never collapses.
#[must_use]
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper bound of the value scale `dataset` is drawn against.
///
/// Considers every dataset sharing that scale plus the scale's suggested max.
#[must_use]
pub fn scale_max_for(config: &ChartConfig, dataset: &Dataset) -> f64 {
    let scale = config.scale_for(dataset);
    let scale_id = scale.map(|s| s.id.as_str());
    let data_max = config
        .datasets
        .iter()
        .filter(|ds| config.scale_for(ds).map(|s| s.id.as_str()) == scale_id)
        .flat_map(|ds| ds.data.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let suggested = scale.and_then(|s| s.suggested_max).unwrap_or(0.0);
    nice_ceiling(data_max.max(suggested))
}

// =============================================================
// Plot area
// =============================================================

/// Region left for the plot after padding, axis gutters, and the legend.
#[must_use]
pub fn plot_area(width: f64, height: f64, config: &ChartConfig) -> Rect {
    let mut left = OUTER_PADDING_PX;
    let mut right = OUTER_PADDING_PX;
    let top = OUTER_PADDING_PX;
    let mut bottom = OUTER_PADDING_PX;

    if config.kind == ChartKind::Bar {
        if config.scales.iter().any(|s| s.position == ScalePosition::Left) {
            left += AXIS_GUTTER_PX;
        }
        if config.scales.iter().any(|s| s.position == ScalePosition::Right) {
            right += AXIS_GUTTER_PX;
        }
        bottom += CATEGORY_GUTTER_PX;
    }
    if config.legend.is_visible() {
        bottom += LEGEND_HEIGHT_PX;
    }

    Rect::new(left, top, (width - left - right).max(0.0), (height - top - bottom).max(0.0))
}

/// Horizontal center of each category band.
#[must_use]
pub fn category_centers(count: usize, area: Rect) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let band = area.w / count as f64;
    (0..count).map(|i| area.x + band * (i as f64 + 0.5)).collect()
}

// =============================================================
// Bar
// =============================================================

/// Grouped bars: one band per category, one slot per dataset inside it.
///
/// Each dataset is normalized against its own scale, so series on a left and
/// a right axis share the plot height independently.
#[must_use]
pub fn bar_rects(config: &ChartConfig, area: Rect) -> Vec<BarRect> {
    let categories = config.labels.len();
    let series = config.datasets.len();
    if categories == 0 || series == 0 {
        return Vec::new();
    }

    let band = area.w / categories as f64;
    let group = band * BAR_GROUP_FILL;
    let slot = group / series as f64;
    let bar_w = slot * BAR_FILL;

    let mut out = Vec::with_capacity(categories * series);
    for (d, ds) in config.datasets.iter().enumerate() {
        let max = scale_max_for(config, ds);
        for (i, value) in ds.data.iter().enumerate().take(categories) {
            let frac = if value.is_finite() { (value / max).clamp(0.0, 1.0) } else { 0.0 };
            let h = area.h * frac;
            let x = area.x + band * i as f64 + (band - group) * 0.5 + slot * d as f64 + (slot - bar_w) * 0.5;
            out.push(BarRect { dataset: d, index: i, rect: Rect::new(x, area.bottom() - h, bar_w, h) });
        }
    }
    out
}

// =============================================================
// Radar
// =============================================================

/// Angle of axis `index` out of `count`, clockwise from 12 o'clock.
#[must_use]
pub fn radar_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return START_ANGLE;
    }
    START_ANGLE + TAU * index as f64 / count as f64
}

/// Vertex of each value on its radar axis, normalized to `max` and clamped
/// to the outer ring.
#[must_use]
pub fn radar_vertices(values: &[f64], center: Point, radius: f64, max: f64) -> Vec<Point> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let frac = if max > 0.0 && v.is_finite() { (v / max).clamp(0.0, 1.0) } else { 0.0 };
            let angle = radar_angle(i, n);
            Point::new(center.x + radius * frac * angle.cos(), center.y + radius * frac * angle.sin())
        })
        .collect()
}

/// Largest circle radius that fits the plot area.
#[must_use]
pub fn fit_radius(area: Rect) -> f64 {
    (area.w.min(area.h) * 0.5).max(0.0)
}

// =============================================================
// Donut
// =============================================================

/// Proportional arcs, one per value, starting at 12 o'clock.
///
/// Negative and non-finite values count as zero. A non-positive total
/// produces no arcs.
#[must_use]
pub fn donut_arcs(values: &[f64]) -> Vec<Arc> {
    let weight = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().copied().map(weight).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = START_ANGLE;
    values
        .iter()
        .map(|v| {
            let end = start + TAU * weight(*v) / total;
            let arc = Arc { start, end };
            start = end;
            arc
        })
        .collect()
}

// =============================================================
// Labels
// =============================================================

/// Tick values from zero to `max`, `steps` intervals apart.
#[must_use]
pub fn ticks(max: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![0.0];
    }
    (0..=steps).map(|i| max * i as f64 / steps as f64).collect()
}

/// Short label for a tick value: integers without decimals, otherwise one.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 { format!("{value:.0}") } else { format!("{value:.1}") }
}
