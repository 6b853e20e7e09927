//! Shared UI crate for Coaching Hub. The navigation bar and everything it needs live here.

pub mod catalog;
pub mod core;
pub mod views;

pub mod components {
    // Inline SVG glyphs (components/icons.rs)
    pub mod icons;
    pub use icons::GlyphIcon;

    // Site header (components/navigation_bar.rs)
    pub mod navigation_bar;
    pub use navigation_bar::NavigationBar;
}

pub use crate::core::ambient::{AmbientEvent, AmbientSource, ManualEvents};
