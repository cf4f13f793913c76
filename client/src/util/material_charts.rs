//! Material ranking to chart configs.
//!
//! Three charts are drawn per ranking, each on its own canvas:
//! a dual-axis bar comparison of the top five, a radar profile of the top
//! material, and a donut of the top five suitability scores.
//!
//! TRADE-OFFS
//! ==========
//! The radar's "Moisture Barrier" axis is a fixed 85. The backend does not
//! report a moisture metric; the constant keeps the five-axis shape the
//! dashboard was designed around until it does.

#[cfg(test)]
#[path = "material_charts_test.rs"]
mod material_charts_test;

use charts::config::{ChartConfig, ChartKind, Dataset, Fill, Legend, Scale, ScalePosition};
use charts::error::ChartResult;
use charts::registry::{ChartBackend, ChartRegistry};

use crate::net::types::{MaterialResult, RankedResults};

pub const MAIN_CHART_ID: &str = "mainChart";
pub const RADAR_CHART_ID: &str = "radarChart";
pub const PIE_CHART_ID: &str = "pieChart";

/// How many materials the bar and donut charts compare.
pub const COMPARE_COUNT: usize = 5;

const COST_COLOR: &str = "#10b981";
const CO2_COLOR: &str = "#3b82f6";
const BAR_RADIUS_PX: f64 = 5.0;

pub const RADAR_AXES: [&str; 5] = ["Biodegradability", "Recyclability", "Tensile Str.", "Moisture Barrier", "Cost Eff."];
pub const TENSILE_SCALE: f64 = 1.5;
pub const COST_SCALE: f64 = 5.0;
pub const RADAR_CEILING: f64 = 100.0;
/// Stand-in for the moisture-barrier axis; not derived from the data.
pub const MOISTURE_PLACEHOLDER: f64 = 85.0;
const RADAR_FILL: &str = "rgba(16, 185, 129, 0.2)";
const RADAR_BORDER: &str = "#10b981";

pub const DONUT_PALETTE: [&str; COMPARE_COUNT] = ["#10b981", "#34d399", "#6ee7b7", "#a7f3d0", "#d1fae5"];
pub const DONUT_CUTOUT: f64 = 0.7;
const DONUT_LEGEND_BOX_PX: f64 = 10.0;

/// Port: whatever draws the three material charts.
pub trait ChartSink {
    /// Draw every chart for `results`, replacing earlier ones.
    ///
    /// # Errors
    ///
    /// Returns the first chart failure. Other charts are still attempted.
    fn render_charts(&mut self, results: &RankedResults) -> ChartResult<()>;
}

impl<B: ChartBackend> ChartSink for ChartRegistry<B> {
    fn render_charts(&mut self, results: &RankedResults) -> ChartResult<()> {
        render_material_charts(self, results)
    }
}

/// Bar chart: cost efficiency (left axis) against CO2 impact (right axis).
#[must_use]
pub fn main_chart_config(results: &RankedResults) -> ChartConfig {
    let top = results.top_n(COMPARE_COUNT);
    ChartConfig::new(ChartKind::Bar)
        .labels(top.iter().map(|m| m.material_type.as_str()))
        .dataset(
            Dataset::new("Cost Efficiency", column(top, |m| m.predicted_cost_efficiency), Fill::Solid(COST_COLOR.into()))
                .with_border_radius(BAR_RADIUS_PX)
                .on_scale("y"),
        )
        .dataset(
            Dataset::new("CO₂ Impact", column(top, |m| m.predicted_co2), Fill::Solid(CO2_COLOR.into()))
                .with_border_radius(BAR_RADIUS_PX)
                .on_scale("y1"),
        )
        .scale(Scale::new("y", ScalePosition::Left).without_grid())
        .scale(Scale::new("y1", ScalePosition::Right).without_grid())
        .scale(Scale::new("x", ScalePosition::Bottom).without_grid())
        .legend(Legend::default())
}

/// Radar chart profiling a single material.
#[must_use]
pub fn radar_chart_config(item: &MaterialResult) -> ChartConfig {
    ChartConfig::new(ChartKind::Radar)
        .labels(RADAR_AXES)
        .dataset(
            Dataset::new(item.material_type.clone(), radar_values(item).to_vec(), Fill::Solid(RADAR_FILL.into()))
                .with_border(RADAR_BORDER)
                .on_scale("r"),
        )
        .scale(Scale::new("r", ScalePosition::Radial).suggested_range(0.0, RADAR_CEILING))
        .legend(Legend::hidden())
}

/// Axis values in [`RADAR_AXES`] order.
#[must_use]
pub fn radar_values(item: &MaterialResult) -> [f64; 5] {
    [
        item.biodegradability,
        item.recyclability,
        (item.tensile_strength * TENSILE_SCALE).min(RADAR_CEILING),
        MOISTURE_PLACEHOLDER,
        (item.predicted_cost_efficiency * COST_SCALE).min(RADAR_CEILING),
    ]
}

/// Donut of the top materials' suitability scores.
#[must_use]
pub fn donut_chart_config(results: &RankedResults) -> ChartConfig {
    let top = results.top_n(COMPARE_COUNT);
    let palette = DONUT_PALETTE.iter().take(top.len()).map(|c| (*c).to_owned()).collect();
    ChartConfig::new(ChartKind::Doughnut)
        .labels(top.iter().map(|m| m.material_type.as_str()))
        .dataset(Dataset::new("Suitability", column(top, |m| m.suitability_score), Fill::PerPoint(palette)))
        .legend(Legend::bottom(DONUT_LEGEND_BOX_PX))
        .cutout(DONUT_CUTOUT)
}

/// Replace all three charts for `results`.
///
/// # Errors
///
/// Returns the first failing chart's error after attempting all three.
pub fn render_material_charts<B: ChartBackend>(
    registry: &mut ChartRegistry<B>,
    results: &RankedResults,
) -> ChartResult<()> {
    let plans = [
        (MAIN_CHART_ID, main_chart_config(results)),
        (RADAR_CHART_ID, radar_chart_config(results.top())),
        (PIE_CHART_ID, donut_chart_config(results)),
    ];
    let mut first_error = None;
    for (target, config) in plans {
        if let Err(e) = registry.replace(target, &config) {
            log::error!("chart {target} failed: {e}; config {}", config.to_json());
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

fn column(items: &[MaterialResult], pick: impl Fn(&MaterialResult) -> f64) -> Vec<f64> {
    items.iter().map(pick).collect()
}
