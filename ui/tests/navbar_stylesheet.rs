//! The navbar stylesheet must define every class the component emits.
//!
//! A substring check is enough to catch a renamed or dropped selector before
//! it turns into an unstyled header at runtime.

use ui::core::view::{
    HEADER_CLASS, HEADER_ELEVATED_CLASS, MOBILE_PANEL_CLASS, MOBILE_PANEL_OPEN_CLASS,
};

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const COMPONENT_SOURCE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/components/navigation_bar.rs"
));

/// Classes written literally in the component markup.
const MARKUP_CLASSES: &[&str] = &[
    "navbar__inner",
    "navbar__bar",
    "navbar__brand",
    "navbar__brand-mark",
    "navbar__menu-toggle",
    "navbar__menu-button",
    "navbar__icon",
    "navbar__icon--lg",
    "navbar__desktop",
    "navbar__links",
    "navbar__link",
    "navbar__courses",
    "navbar__dropdown",
    "navbar__subject",
    "navbar__subject--compact",
    "navbar__subject-title",
    "navbar__course-list",
    "navbar__course",
    "navbar__actions",
    "navbar__login",
    "navbar__login--stacked",
    "navbar__signup",
    "navbar__signup--stacked",
    "navbar__mobile-body",
    "navbar__mobile-link",
    "navbar__mobile-subjects",
    "navbar__mobile-actions",
];

fn defines(class: &str) -> bool {
    let selector = format!(".{class}");
    NAVBAR_CSS.match_indices(&selector).any(|(at, _)| {
        let rest = &NAVBAR_CSS[at + selector.len()..];
        !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

#[test]
fn view_model_classes_are_styled() {
    let emitted = [
        HEADER_CLASS,
        HEADER_ELEVATED_CLASS,
        MOBILE_PANEL_CLASS,
        MOBILE_PANEL_OPEN_CLASS,
    ];
    let missing: Vec<_> = emitted
        .iter()
        .flat_map(|classes| classes.split_whitespace())
        .filter(|class| !defines(class))
        .collect();
    assert!(missing.is_empty(), "unstyled view-model classes: {missing:?}");
}

#[test]
fn markup_classes_are_styled_and_used() {
    let mut missing = Vec::new();
    for class in MARKUP_CLASSES {
        assert!(
            COMPONENT_SOURCE.contains(class),
            "`{class}` listed here but no longer used by the component"
        );
        if !defines(class) {
            missing.push(*class);
        }
    }
    assert!(missing.is_empty(), "unstyled markup classes: {missing:?}");
}

#[test]
fn mobile_panel_hides_on_wide_screens() {
    let media = NAVBAR_CSS
        .find("@media (min-width: 768px)")
        .expect("desktop breakpoint block");
    let block = &NAVBAR_CSS[media..];
    assert!(block.contains(".navbar__mobile"));
    assert!(block.contains(".navbar__desktop"));
}

#[test]
fn elevated_variant_blurs_and_shadows() {
    let start = NAVBAR_CSS
        .find(".navbar--elevated {")
        .expect("elevated rule");
    let rule = &NAVBAR_CSS[start..start + NAVBAR_CSS[start..].find('}').unwrap_or(0)];
    assert!(rule.contains("backdrop-filter"));
    assert!(rule.contains("box-shadow"));
}
