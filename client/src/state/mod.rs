//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types held in `RwSignal`s and shared through Leptos context.
//! Nothing here touches the DOM, so every state transition is testable
//! natively.

pub mod form;
pub mod results;
pub mod ui;
