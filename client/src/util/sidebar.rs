//! Sidebar open/closed toggle.
//!
//! The panel's visibility lives entirely in its `active` CSS class, so the
//! controller holds no state of its own and each call flips whatever the
//! element currently shows.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// DOM id of the sidebar panel.
pub const SIDEBAR_ID: &str = "sidebarUI";

/// Class that marks the sidebar as open.
pub const ACTIVE_CLASS: &str = "active";

/// Port: an element whose class list can be toggled.
pub trait ClassToggle {
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
}

/// Toggle the `active` class on `panel`.
///
/// Returns the new state, or `None` after logging if there is no panel.
pub fn toggle_panel<T: ClassToggle + ?Sized>(panel: Option<&T>) -> Option<bool> {
    let Some(panel) = panel else {
        log::error!("Sidebar element not found!");
        return None;
    };
    Some(panel.toggle_class(ACTIVE_CLASS))
}

/// Toggle the page's sidebar panel.
pub fn toggle_sidebar() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let panel = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SIDEBAR_ID));
        toggle_panel(panel.as_ref())
    }
    #[cfg(not(feature = "csr"))]
    {
        toggle_panel::<NoPanel>(None)
    }
}

#[cfg(feature = "csr")]
impl ClassToggle for web_sys::Element {
    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(now_present) => now_present,
            Err(e) => {
                log::error!("class toggle on {} failed: {e:?}", self.id());
                self.class_list().contains(class)
            }
        }
    }
}

/// Stand-in panel type for builds without a DOM.
#[cfg(not(feature = "csr"))]
enum NoPanel {}

#[cfg(not(feature = "csr"))]
impl ClassToggle for NoPanel {
    fn toggle_class(&self, _class: &str) -> bool {
        match *self {}
    }
}
