//! Local UI chrome state for the submit control.
//!
//! DESIGN
//! ======
//! The submit flow captures the button's state before going busy and puts
//! that exact state back afterwards, whatever the outcome. Restoring the
//! capture rather than a hard-coded idle value keeps the two in step if the
//! label is ever changed elsewhere.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Label shown on the submit button while idle.
pub const IDLE_LABEL: &str = "Analyze Packaging";

/// Label shown while a prediction is in flight.
pub const BUSY_LABEL: &str = "Analyzing...";

/// Label and enabled state of the form's submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self { label: IDLE_LABEL.to_owned(), disabled: false }
    }
}

impl SubmitButton {
    /// The in-flight state: busy label, disabled.
    #[must_use]
    pub fn busy() -> Self {
        Self { label: BUSY_LABEL.to_owned(), disabled: true }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.disabled && self.label == BUSY_LABEL
    }
}
