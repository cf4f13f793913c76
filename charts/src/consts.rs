//! Shared numeric constants for the charts crate.

// ── Math ────────────────────────────────────────────────────────

/// Angle of 12 o'clock on a canvas, where radar axes and donut arcs start.
pub const START_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

// ── Layout ──────────────────────────────────────────────────────

/// Padding around the whole chart, in canvas pixels.
pub const OUTER_PADDING_PX: f64 = 8.0;

/// Horizontal room reserved for a vertical axis' tick labels.
pub const AXIS_GUTTER_PX: f64 = 36.0;

/// Vertical room reserved under the plot for category labels.
pub const CATEGORY_GUTTER_PX: f64 = 22.0;

/// Height of the legend strip when the legend is shown.
pub const LEGEND_HEIGHT_PX: f64 = 24.0;

/// Share of a category band occupied by its group of bars.
pub const BAR_GROUP_FILL: f64 = 0.8;

/// Share of a single bar slot occupied by the bar itself.
pub const BAR_FILL: f64 = 0.9;

/// Number of gridline steps drawn on value axes.
pub const TICK_COUNT: usize = 5;

// ── Text ────────────────────────────────────────────────────────

/// Font used for tick, category, and legend labels.
pub const LABEL_FONT: &str = "11px sans-serif";

/// Neutral color for axis labels and gridlines.
pub const AXIS_COLOR: &str = "#6b7280";

/// Gridline color.
pub const GRID_COLOR: &str = "rgba(107, 114, 128, 0.2)";

/// Default legend swatch width when none is configured.
pub const DEFAULT_LEGEND_BOX_PX: f64 = 12.0;
