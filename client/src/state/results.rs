//! Results presentation state: summary card and ranking table.
//!
//! DESIGN
//! ======
//! [`ResultsView`] is computed once per successful prediction from the ranked
//! list and then rendered as-is, so the table is always rebuilt wholesale and
//! never accumulates rows across submissions.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::types::{MaterialResult, RankedResults};

/// Which of the two mutually exclusive main sections is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultsVisibility {
    /// Nothing submitted yet.
    #[default]
    Placeholder,
    /// A ranking has been rendered.
    Results,
}

/// Rank badge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Secondary,
}

impl BadgeTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "badge bg-success rounded-pill",
            Self::Secondary => "badge bg-secondary rounded-pill",
        }
    }
}

/// Headline fields taken from the top-ranked material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopSummary {
    pub name: String,
    pub score: String,
    pub co2: String,
    pub cost: String,
}

/// One row of the ranking table.
#[derive(Clone, Debug, PartialEq)]
pub struct RankRow {
    /// 1-based position in the backend ranking.
    pub rank: usize,
    pub material: String,
    pub score: String,
    /// Width of the score bar, 0..=100 percent.
    pub bar_width_pct: f64,
    pub biodegradability: String,
    pub co2: String,
    pub badge: BadgeTone,
}

impl RankRow {
    fn new(index: usize, item: &MaterialResult) -> Self {
        Self {
            rank: index + 1,
            material: item.material_type.clone(),
            score: format_number(item.suitability_score),
            bar_width_pct: bar_width(item.suitability_score),
            biodegradability: format!("{} / 100", format_number(item.biodegradability)),
            co2: format!("{} units", format_number(item.predicted_co2)),
            badge: if index == 0 { BadgeTone::Success } else { BadgeTone::Secondary },
        }
    }

    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", format_number(self.bar_width_pct))
    }
}

/// Everything the results section displays for one ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub summary: TopSummary,
    pub rows: Vec<RankRow>,
}

impl ResultsView {
    #[must_use]
    pub fn from_ranking(results: &RankedResults) -> Self {
        let top = results.top();
        let summary = TopSummary {
            name: top.material_type.clone(),
            score: format_number(top.suitability_score),
            co2: format_number(top.predicted_co2),
            cost: format_number(top.predicted_cost_efficiency),
        };
        let rows = results.as_slice().iter().enumerate().map(|(i, item)| RankRow::new(i, item)).collect();
        Self { summary, rows }
    }
}

/// Page-level recommendation state shared through context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendState {
    pub visibility: ResultsVisibility,
    pub view: Option<ResultsView>,
}

impl RecommendState {
    /// Switch to the results section showing `view`, replacing any previous one.
    pub fn show_results(&mut self, view: ResultsView) {
        self.view = Some(view);
        self.visibility = ResultsVisibility::Results;
    }

    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        self.visibility == ResultsVisibility::Placeholder
    }

    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.visibility == ResultsVisibility::Results
    }
}

/// Display a backend number the way the dashboard shows it: integers
/// without a decimal point, everything else in shortest round-trip form.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

fn bar_width(score: f64) -> f64 {
    if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 }
}
