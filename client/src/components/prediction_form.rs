//! Sidebar form collecting the product description.
//!
//! Inputs write straight into the shared [`FormDraft`]; parsing happens only
//! when the form is submitted.

use leptos::prelude::*;

use crate::state::form::{CATEGORIES, FieldSource, FormDraft, FormField};
use crate::state::ui::SubmitButton;

/// Prediction input form. `on_submit` receives the raw submit event.
#[component]
pub fn PredictionForm(on_submit: Callback<leptos::ev::SubmitEvent>) -> impl IntoView {
    let draft = expect_context::<RwSignal<FormDraft>>();
    let button = expect_context::<RwSignal<SubmitButton>>();

    view! {
        <form id="predictionForm" class="prediction-form" on:submit=move |ev| on_submit.run(ev)>
            <NumberInput field=FormField::Weight step="0.1"/>
            <label class="form-label" for=FormField::Category.element_id()>
                {FormField::Category.label()}
            </label>
            <select
                id=FormField::Category.element_id()
                class="form-select"
                prop:value=move || draft.get().category
                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            >
                {CATEGORIES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <NumberInput field=FormField::FragilityScore step="1"/>
            <NumberInput field=FormField::ShelfLife step="1"/>
            <div class="dimension-row">
                <NumberInput field=FormField::DimL step="0.1"/>
                <NumberInput field=FormField::DimW step="0.1"/>
                <NumberInput field=FormField::DimH step="0.1"/>
            </div>
            <button type="submit" class="btn btn-success w-100" disabled=move || button.get().disabled>
                {move || button.get().label}
            </button>
        </form>
    }
}

/// Labeled numeric input bound to one draft field.
#[component]
fn NumberInput(field: FormField, step: &'static str) -> impl IntoView {
    let draft = expect_context::<RwSignal<FormDraft>>();

    view! {
        <div class="form-field">
            <label class="form-label" for=field.element_id()>
                {field.label()}
            </label>
            <input
                id=field.element_id()
                class="form-control"
                type="number"
                step=step
                required=true
                prop:value=move || draft.with(|d| d.raw_value(field))
                on:input=move |ev| draft.update(|d| *d.slot_mut(field) = event_target_value(&ev))
            />
        </div>
    }
}
