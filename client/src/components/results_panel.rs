//! Main results area: placeholder, top-material summary, and ranking table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one of the placeholder and the results section is visible. Both
//! read [`RecommendState`] from context; the submit flow is the only writer.

use leptos::prelude::*;

use crate::state::results::{RankRow, RecommendState, TopSummary};

/// Placeholder until the first ranking, then summary card plus table.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<RecommendState>>();

    view! {
        <div id="initialState" class=move || hidden_unless(state.get().placeholder_visible(), "results-placeholder")>
            <h2>"Ready to analyze"</h2>
            <p>"Describe your product in the sidebar to get packaging recommendations."</p>
        </div>
        <div id="resultsSection" class=move || hidden_unless(state.get().results_visible(), "results-section")>
            {move || {
                state
                    .get()
                    .view
                    .map(|view| {
                        view! {
                            <SummaryCard summary=view.summary/>
                            <RankingTable rows=view.rows/>
                        }
                    })
            }}
        </div>
    }
}

/// `base`, plus `d-none` when the section should be hidden.
fn hidden_unless(visible: bool, base: &str) -> String {
    if visible { base.to_owned() } else { format!("{base} d-none") }
}

#[component]
fn SummaryCard(summary: TopSummary) -> impl IntoView {
    view! {
        <div class="card summary-card">
            <div class="card-body">
                <span class="summary-card__eyebrow">"Top Recommendation"</span>
                <h3 id="topName">{summary.name}</h3>
                <div class="summary-card__metrics">
                    <div>
                        <span class="summary-card__label">"Suitability"</span>
                        <span id="topScore">{summary.score}</span>
                    </div>
                    <div>
                        <span class="summary-card__label">"CO₂"</span>
                        <span id="topCO2">{summary.co2}</span>
                    </div>
                    <div>
                        <span class="summary-card__label">"Cost Efficiency"</span>
                        <span id="topCost">{summary.cost}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RankingTable(rows: Vec<RankRow>) -> impl IntoView {
    view! {
        <table class="table ranking-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Material"</th>
                    <th>"Suitability"</th>
                    <th>"Biodegradability"</th>
                    <th>"CO₂"</th>
                </tr>
            </thead>
            <tbody id="rankingTableBody">
                {rows
                    .into_iter()
                    .map(|row| {
                        let bar_style = row.bar_style();
                        view! {
                            <tr>
                                <td>
                                    <span class=row.badge.css_class()>{row.rank}</span>
                                </td>
                                <td class="fw-bold">{row.material}</td>
                                <td>
                                    <div class="d-flex align-items-center">
                                        <span class="me-2">{row.score}</span>
                                        <div class="progress flex-grow-1">
                                            <div class="progress-bar bg-success" role="progressbar" style=bar_style></div>
                                        </div>
                                    </div>
                                </td>
                                <td>{row.biodegradability}</td>
                                <td>{row.co2}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
