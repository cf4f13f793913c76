//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::recommend::RecommendPage;
use crate::state::{form::FormDraft, results::RecommendState, ui::SubmitButton};

/// Root application component.
///
/// Provides the shared state contexts and renders the single dashboard page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let draft = RwSignal::new(FormDraft::default());
    let results = RwSignal::new(RecommendState::default());
    let button = RwSignal::new(SubmitButton::default());

    provide_context(draft);
    provide_context(results);
    provide_context(button);

    view! {
        <Title text="EcoPack AI | Packaging Recommendations"/>
        <RecommendPage/>
    }
}
