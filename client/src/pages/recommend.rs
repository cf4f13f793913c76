//! Recommendation dashboard: sidebar form, results, and charts.
//!
//! ARCHITECTURE
//! ============
//! The page wires browser adapters into [`submit_prediction`]: signals for
//! [`RecommendView`], a locally stored [`ChartRegistry`] for the charts, and
//! [`GlooTransport`] for the network. Everything the flow decides is covered
//! by its native tests; this file only connects it to the DOM.

use leptos::prelude::*;

use crate::components::chart_panel::ChartPanel;
use crate::components::results_panel::ResultsPanel;
use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::state::ui::SubmitButton;

#[cfg(feature = "csr")]
use charts::backend::CanvasBackend;
#[cfg(feature = "csr")]
use charts::error::{ChartError, ChartResult};
#[cfg(feature = "csr")]
use charts::registry::ChartRegistry;

#[cfg(feature = "csr")]
use crate::net::api::GlooTransport;
#[cfg(feature = "csr")]
use crate::net::types::RankedResults;
#[cfg(feature = "csr")]
use crate::pages::submit_flow::{RecommendView, submit_prediction};
#[cfg(feature = "csr")]
use crate::state::form::FormDraft;
#[cfg(feature = "csr")]
use crate::state::results::{RecommendState, ResultsView};
#[cfg(feature = "csr")]
use crate::util::material_charts::{ChartSink, render_material_charts};

/// Dashboard page.
#[component]
pub fn RecommendPage() -> impl IntoView {
    let button = expect_context::<RwSignal<SubmitButton>>();

    #[cfg(feature = "csr")]
    let charts = StoredValue::new_local(ChartRegistry::new(CanvasBackend::new()));
    #[cfg(feature = "csr")]
    on_cleanup(move || {
        charts.try_update_value(ChartRegistry::clear);
    });
    #[cfg(feature = "csr")]
    let draft = expect_context::<RwSignal<FormDraft>>();
    #[cfg(feature = "csr")]
    let results = expect_context::<RwSignal<RecommendState>>();

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if button.get_untracked().disabled {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let draft = draft.get_untracked();
            leptos::task::spawn_local(async move {
                let mut view = SignalView { button, results };
                let mut sink = StoredCharts(charts);
                // Failures have already been alerted by the flow.
                if let Ok(count) = submit_prediction(&mut view, &mut sink, &GlooTransport, &draft).await {
                    log::info!("rendered {count} recommendations");
                }
            });
        }
    });

    view! {
        <div class="app-shell">
            <header class="app-header">
                <SidebarToggle/>
                <h1>"EcoPack AI"</h1>
            </header>
            <Sidebar on_submit=on_submit/>
            <main class="app-main">
                <ResultsPanel/>
                <ChartPanel/>
            </main>
        </div>
    }
}

/// [`RecommendView`] over the page's signals and the browser window.
#[cfg(feature = "csr")]
struct SignalView {
    button: RwSignal<SubmitButton>,
    results: RwSignal<RecommendState>,
}

#[cfg(feature = "csr")]
impl RecommendView for SignalView {
    fn submit_button(&self) -> SubmitButton {
        self.button.get_untracked()
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.button.set(button);
    }

    fn show_results(&mut self, view: ResultsView) {
        self.results.update(|s| s.show_results(view));
    }

    fn alert(&mut self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::error!("alert unavailable: {message}");
        }
    }

    fn close_sidebar(&mut self) {
        crate::util::sidebar::toggle_sidebar();
    }
}

/// [`ChartSink`] over the page-scoped registry.
#[cfg(feature = "csr")]
struct StoredCharts(StoredValue<ChartRegistry<CanvasBackend>, LocalStorage>);

#[cfg(feature = "csr")]
impl ChartSink for StoredCharts {
    fn render_charts(&mut self, results: &RankedResults) -> ChartResult<()> {
        self.0
            .try_update_value(|registry| render_material_charts(registry, results))
            .unwrap_or_else(|| Err(ChartError::Draw("chart registry disposed".to_owned())))
    }
}
