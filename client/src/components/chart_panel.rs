//! Canvas targets for the three material charts.

use leptos::prelude::*;

use crate::util::material_charts::{MAIN_CHART_ID, PIE_CHART_ID, RADAR_CHART_ID};

/// Drawing surfaces the chart registry resolves by id.
#[component]
pub fn ChartPanel() -> impl IntoView {
    view! {
        <div class="chart-grid">
            <div class="card chart-card chart-card--wide">
                <h4>"Cost vs. CO₂"</h4>
                <canvas id=MAIN_CHART_ID width="640" height="320"></canvas>
            </div>
            <div class="card chart-card">
                <h4>"Top Material Profile"</h4>
                <canvas id=RADAR_CHART_ID width="320" height="320"></canvas>
            </div>
            <div class="card chart-card">
                <h4>"Suitability Share"</h4>
                <canvas id=PIE_CHART_ID width="320" height="320"></canvas>
            </div>
        </div>
    }
}
