//! Slide-out sidebar hosting the prediction form.

use leptos::prelude::*;

use crate::components::prediction_form::PredictionForm;
use crate::util::sidebar::{SIDEBAR_ID, toggle_sidebar};

/// Sidebar panel. Open/closed state is the panel's `active` class.
#[component]
pub fn Sidebar(on_submit: Callback<leptos::ev::SubmitEvent>) -> impl IntoView {
    view! {
        <aside id=SIDEBAR_ID class="sidebar">
            <div class="sidebar__header">
                <h2>"Product Details"</h2>
                <button class="btn sidebar__close" title="Close" on:click=move |_| {
                    toggle_sidebar();
                }>
                    "×"
                </button>
            </div>
            <PredictionForm on_submit=on_submit/>
        </aside>
    }
}

/// Header button that opens or closes the sidebar.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    view! {
        <button class="btn sidebar-toggle" title="Toggle sidebar" on:click=move |_| {
            toggle_sidebar();
        }>
            "☰"
        </button>
    }
}
