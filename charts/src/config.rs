//! Chart configuration model.
//!
//! A [`ChartConfig`] is a complete, backend-independent description of one
//! chart: what kind it is, which categories it spans, the series drawn over
//! those categories, the value scales series are plotted against, and how the
//! legend is placed. Configs are plain data so they can be built and checked
//! without a browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

use crate::error::{ChartError, ChartResult};

/// Visual form of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Grouped vertical bars, one group per category.
    Bar,
    /// Spider chart, one axis per category.
    Radar,
    /// Ring of proportional slices, one per category.
    Doughnut,
}

/// How a dataset is painted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    /// One color for every point of the dataset.
    Solid(String),
    /// One color per point, by index.
    PerPoint(Vec<String>),
}

impl Fill {
    /// Color for the point at `index`. Per-point palettes wrap around.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        match self {
            Self::Solid(c) => c,
            Self::PerPoint(colors) if colors.is_empty() => crate::consts::AXIS_COLOR,
            Self::PerPoint(colors) => &colors[index % colors.len()],
        }
    }
}

/// A named series of values plotted over the config's categories.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: Fill,
    pub border: Option<String>,
    /// Scale this dataset is measured against; `None` uses the first scale.
    pub scale_id: Option<String>,
    pub border_radius: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>, fill: Fill) -> Self {
        Self { label: label.into(), data, fill, border: None, scale_id: None, border_radius: 0.0 }
    }

    #[must_use]
    pub fn with_border(mut self, color: impl Into<String>) -> Self {
        self.border = Some(color.into());
        self
    }

    #[must_use]
    pub fn on_scale(mut self, scale_id: impl Into<String>) -> Self {
        self.scale_id = Some(scale_id.into());
        self
    }

    #[must_use]
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }
}

/// Where a scale's ticks are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePosition {
    Left,
    Right,
    Bottom,
    Radial,
}

/// A value (or category) axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scale {
    pub id: String,
    pub position: ScalePosition,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
    pub grid: bool,
}

impl Scale {
    #[must_use]
    pub fn new(id: impl Into<String>, position: ScalePosition) -> Self {
        Self { id: id.into(), position, suggested_min: None, suggested_max: None, grid: true }
    }

    #[must_use]
    pub fn suggested_range(mut self, min: f64, max: f64) -> Self {
        self.suggested_min = Some(min);
        self.suggested_max = Some(max);
        self
    }

    #[must_use]
    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }

    /// Whether values are measured along this scale (category axes are not).
    #[must_use]
    pub fn is_value_axis(&self) -> bool {
        self.position != ScalePosition::Bottom
    }
}

/// Legend placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Bottom,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
    pub box_width: f64,
}

impl Default for Legend {
    fn default() -> Self {
        Self { position: LegendPosition::Bottom, box_width: crate::consts::DEFAULT_LEGEND_BOX_PX }
    }
}

impl Legend {
    #[must_use]
    pub fn hidden() -> Self {
        Self { position: LegendPosition::Hidden, ..Self::default() }
    }

    #[must_use]
    pub fn bottom(box_width: f64) -> Self {
        Self { position: LegendPosition::Bottom, box_width }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.position != LegendPosition::Hidden
    }
}

/// Complete description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub scales: Vec<Scale>,
    pub legend: Legend,
    /// Inner radius of a doughnut as a fraction of the outer radius.
    pub cutout: Option<f64>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, labels: Vec::new(), datasets: Vec::new(), scales: Vec::new(), legend: Legend::default(), cutout: None }
    }

    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scales.push(scale);
        self
    }

    #[must_use]
    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn cutout(mut self, ratio: f64) -> Self {
        self.cutout = Some(ratio.clamp(0.0, 0.95));
        self
    }

    /// Look up a scale by id.
    #[must_use]
    pub fn scale_by_id(&self, id: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.id == id)
    }

    /// The value scale a dataset is measured against, if any is declared.
    #[must_use]
    pub fn scale_for(&self, dataset: &Dataset) -> Option<&Scale> {
        match &dataset.scale_id {
            Some(id) => self.scale_by_id(id),
            None => self.scales.iter().find(|s| s.is_value_axis()),
        }
    }

    /// Check that every dataset lines up with the categories and scales.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidData`] if a dataset's length differs from
    /// the label count or it names a scale the config does not declare.
    pub fn validate(&self) -> ChartResult<()> {
        for ds in &self.datasets {
            if ds.data.len() != self.labels.len() {
                return Err(ChartError::InvalidData(format!(
                    "dataset '{}' has {} values for {} labels",
                    ds.label,
                    ds.data.len(),
                    self.labels.len()
                )));
            }
            if let Some(id) = &ds.scale_id {
                if self.scale_by_id(id).is_none() {
                    return Err(ChartError::InvalidData(format!("dataset '{}' references unknown scale '{id}'", ds.label)));
                }
            }
        }
        Ok(())
    }

    /// Serialize for diagnostics.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
