//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and read shared state from Leptos
//! context providers. Orchestration of a submission lives in `pages`.

pub mod chart_panel;
pub mod prediction_form;
pub mod results_panel;
pub mod sidebar;
