//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (canvas charts, DOM classes)
//! from page and component logic so the mapping rules stay testable.

pub mod material_charts;
pub mod sidebar;
