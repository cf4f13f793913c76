//! One prediction submission from button press to rendered results.
//!
//! DESIGN
//! ======
//! The flow talks to the page only through [`RecommendView`] and
//! [`ChartSink`], and to the network only through [`PredictTransport`], so
//! the whole sequence (busy state, exchange, rendering, alert, restore) runs
//! natively in tests. The submit button is the only guard against
//! overlapping submissions; the page refuses to start a flow while it is
//! disabled.

#[cfg(test)]
#[path = "submit_flow_test.rs"]
mod submit_flow_test;

use thiserror::Error;

use crate::net::api::{self, PredictError, PredictTransport};
use crate::state::form::{self, FieldSource, FormError};
use crate::state::results::ResultsView;
use crate::state::ui::SubmitButton;
use crate::util::material_charts::ChartSink;

/// Port: the parts of the page a submission reads and writes.
pub trait RecommendView {
    fn submit_button(&self) -> SubmitButton;
    fn set_submit_button(&mut self, button: SubmitButton);
    /// Swap the placeholder for the results section.
    fn show_results(&mut self, view: ResultsView);
    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
    /// Toggle the sidebar shut after a successful submission.
    fn close_sidebar(&mut self);
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Predict(#[from] PredictError),
}

impl SubmitError {
    /// Text shown in the alert for this failure.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::Form(e) => e.to_string(),
            Self::Predict(e) => e.alert_text(),
        }
    }
}

/// Run one submission against the current form contents.
///
/// On success the results and charts are rendered and the sidebar is closed;
/// on failure a single alert is shown and nothing else changes. Either way
/// the submit button ends in the state it had before the call. Returns the
/// number of ranked materials shown.
///
/// # Errors
///
/// Returns the form or prediction failure that was alerted.
pub async fn submit_prediction<V, C, T, S>(
    view: &mut V,
    charts: &mut C,
    transport: &T,
    source: &S,
) -> Result<usize, SubmitError>
where
    V: RecommendView,
    C: ChartSink,
    T: PredictTransport,
    S: FieldSource,
{
    let saved = view.submit_button();
    view.set_submit_button(SubmitButton::busy());

    let outcome = exchange(view, charts, transport, source).await;
    if let Err(e) = &outcome {
        if let SubmitError::Predict(PredictError::Transport(cause)) = e {
            log::error!("Error: {cause}");
        }
        view.alert(&e.alert_text());
    }

    view.set_submit_button(saved);
    outcome
}

async fn exchange<V, C, T, S>(view: &mut V, charts: &mut C, transport: &T, source: &S) -> Result<usize, SubmitError>
where
    V: RecommendView,
    C: ChartSink,
    T: PredictTransport,
    S: FieldSource,
{
    let request = form::collect_request(source)?;
    let ranked = api::predict(transport, &request).await?;

    view.show_results(ResultsView::from_ranking(&ranked));
    if let Err(e) = charts.render_charts(&ranked) {
        log::warn!("charts incomplete: {e}");
    }
    view.close_sidebar();
    Ok(ranked.len())
}
