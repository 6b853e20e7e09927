//! Pure mapping from `NavState` to what the navbar shows.
//!
//! Components read a `NavView` and never branch on raw state themselves, so
//! every visual rule here can be checked without a renderer.

use crate::catalog::SubjectEntry;

use super::state::NavState;

pub const HEADER_CLASS: &str = "navbar";
pub const HEADER_ELEVATED_CLASS: &str = "navbar navbar--elevated";
pub const MOBILE_PANEL_CLASS: &str = "navbar__mobile";
pub const MOBILE_PANEL_OPEN_CLASS: &str = "navbar__mobile navbar__mobile--open";

/// Inline icons used by the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    ChevronDown,
    ChevronUp,
    LogIn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    pub header_class: &'static str,
    /// `Some` only while the dropdown is open; always the full table.
    pub dropdown: Option<&'static [SubjectEntry]>,
    pub chevron: Glyph,
    pub menu_glyph: Glyph,
    pub menu_button_label: &'static str,
    pub mobile_panel_class: &'static str,
}

pub fn nav_view(state: &NavState, subjects: &'static [SubjectEntry]) -> NavView {
    NavView {
        header_class: if state.is_scrolled {
            HEADER_ELEVATED_CLASS
        } else {
            HEADER_CLASS
        },
        dropdown: state.is_dropdown_open.then_some(subjects),
        chevron: if state.is_dropdown_open {
            Glyph::ChevronUp
        } else {
            Glyph::ChevronDown
        },
        menu_glyph: if state.is_mobile_menu_open {
            Glyph::Close
        } else {
            Glyph::Menu
        },
        menu_button_label: if state.is_mobile_menu_open {
            "Close menu"
        } else {
            "Open menu"
        },
        mobile_panel_class: if state.is_mobile_menu_open {
            MOBILE_PANEL_OPEN_CLASS
        } else {
            MOBILE_PANEL_CLASS
        },
    }
}
