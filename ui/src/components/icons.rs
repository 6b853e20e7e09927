use dioxus::prelude::*;

use crate::core::view::Glyph;

/// Lucide-style outline icon for a [`Glyph`], sized by the `class` it is given.
#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[props(default = "navbar__icon".to_string())] class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph_paths(glyph)}
        }
    }
}

fn glyph_paths(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Glyph::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        Glyph::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        Glyph::ChevronUp => rsx! {
            path { d: "m18 15-6-6-6 6" }
        },
        Glyph::LogIn => rsx! {
            path { d: "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4" }
            polyline { points: "10 17 15 12 10 7" }
            line { x1: "15", x2: "3", y1: "12", y2: "12" }
        },
    }
}
