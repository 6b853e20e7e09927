use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::icons::GlyphIcon;
use crate::catalog::{NavEntry, SubjectEntry, BRAND, NAV_ENTRIES, PLACEHOLDER_HREF, SUBJECTS};
use crate::core::ambient::{AmbientSource, EventSink, ListenerGuard};
use crate::core::state::{NavEvent, NavState};
use crate::core::view::{nav_view, Glyph};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed site header: brand, primary links, subjects dropdown, mobile panel
/// and the login/sign-up actions.
///
/// Scroll position and outside presses come from the [`AmbientSource`] in
/// context (the platform default when none is provided). The subscription is
/// taken on mount and released on unmount.
#[component]
pub fn NavigationBar() -> Element {
    let mut state = use_signal(NavState::default);
    use_ambient_listeners(state);

    let view = nav_view(&state(), &SUBJECTS);
    let menu_expanded = if state().is_mobile_menu_open { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "{view.header_class}",
            div { class: "navbar__inner",
                div { class: "navbar__bar",
                    div { class: "navbar__brand",
                        h1 { class: "navbar__brand-mark", "{BRAND}" }
                    }

                    div { class: "navbar__menu-toggle",
                        button {
                            r#type: "button",
                            class: "navbar__menu-button",
                            aria_label: view.menu_button_label,
                            aria_controls: "navbar-mobile",
                            aria_expanded: menu_expanded,
                            onclick: move |_| dispatch(&mut state, NavEvent::MenuToggled),
                            GlyphIcon { glyph: view.menu_glyph, class: "navbar__icon navbar__icon--lg".to_string() }
                        }
                    }

                    DesktopNav { state }
                }

                MobileNav { state }
            }
        }
    }
}

/// Subscribes once per mount and releases when the scope is dropped.
fn use_ambient_listeners(state: Signal<NavState>) {
    let guard = use_hook(move || {
        let source = try_consume_context::<AmbientSource>().unwrap_or_else(AmbientSource::platform);
        let sink: EventSink = Rc::new(move |event| {
            let mut state = state;
            dispatch(&mut state, event.into());
        });
        let guard: Option<ListenerGuard> = match source.subscribe(sink) {
            Ok(guard) => Some(guard),
            Err(err) => {
                tracing::warn!("navbar running without ambient events: {err}");
                None
            }
        };
        Rc::new(RefCell::new(guard))
    });

    use_drop(move || {
        if let Some(guard) = guard.borrow_mut().take() {
            guard.release();
        }
    });
}

/// Writes only on change so a stream of scroll events does not re-render.
fn dispatch(state: &mut Signal<NavState>, event: NavEvent) {
    let current = *state.peek();
    let next = current.after(event);
    if next != current {
        tracing::debug!(?event, ?next, "navbar state changed");
        state.set(next);
    }
}

#[component]
fn DesktopNav(state: Signal<NavState>) -> Element {
    rsx! {
        div { class: "navbar__desktop",
            div { class: "navbar__links",
                for entry in NAV_ENTRIES {
                    DesktopEntry { key: "{entry.label()}", entry, state }
                }
            }
            div { class: "navbar__actions",
                AuthActions { stacked: false }
            }
        }
    }
}

#[component]
fn DesktopEntry(entry: NavEntry, state: Signal<NavState>) -> Element {
    let NavEntry::Courses = entry else {
        return rsx! {
            a { class: "navbar__link", href: PLACEHOLDER_HREF, "{entry.label()}" }
        };
    };

    let mut state = state;
    let view = nav_view(&state(), &SUBJECTS);
    let expanded = if view.dropdown.is_some() { "true" } else { "false" };

    rsx! {
        div { class: "navbar__courses", "data-nav-dropdown": "desktop",
            button {
                r#type: "button",
                class: "navbar__link navbar__courses-toggle",
                aria_haspopup: "true",
                aria_expanded: expanded,
                onclick: move |_| dispatch(&mut state, NavEvent::CoursesToggled),
                "{entry.label()}"
                GlyphIcon { glyph: view.chevron }
            }
            if let Some(subjects) = view.dropdown {
                div { class: "navbar__dropdown", role: "menu",
                    for subject in subjects.iter() {
                        SubjectGroup { key: "{subject.title}", subject: *subject, compact: false }
                    }
                }
            }
        }
    }
}

#[component]
fn MobileNav(state: Signal<NavState>) -> Element {
    let view = nav_view(&state(), &SUBJECTS);

    rsx! {
        div { id: "navbar-mobile", class: "{view.mobile_panel_class}",
            div { class: "navbar__mobile-body",
                for entry in NAV_ENTRIES {
                    MobileEntry { key: "{entry.label()}", entry, state }
                }
                div { class: "navbar__mobile-actions",
                    AuthActions { stacked: true }
                }
            }
        }
    }
}

#[component]
fn MobileEntry(entry: NavEntry, state: Signal<NavState>) -> Element {
    let NavEntry::Courses = entry else {
        return rsx! {
            a { class: "navbar__mobile-link", href: PLACEHOLDER_HREF, "{entry.label()}" }
        };
    };

    let mut state = state;
    let view = nav_view(&state(), &SUBJECTS);
    let expanded = if view.dropdown.is_some() { "true" } else { "false" };

    rsx! {
        div { class: "navbar__mobile-courses", "data-nav-dropdown": "mobile",
            button {
                r#type: "button",
                class: "navbar__mobile-link navbar__mobile-toggle",
                aria_expanded: expanded,
                onclick: move |_| dispatch(&mut state, NavEvent::CoursesToggled),
                "{entry.label()}"
                GlyphIcon { glyph: view.chevron }
            }
            if let Some(subjects) = view.dropdown {
                div { class: "navbar__mobile-subjects",
                    for subject in subjects.iter() {
                        SubjectGroup { key: "{subject.title}", subject: *subject, compact: true }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectGroup(subject: SubjectEntry, compact: bool) -> Element {
    let class = if compact {
        "navbar__subject navbar__subject--compact"
    } else {
        "navbar__subject"
    };

    rsx! {
        div { class: "{class}",
            div { class: "navbar__subject-title", "{subject.title}" }
            div { class: "navbar__course-list",
                for course in subject.courses.iter() {
                    a {
                        key: "{course}",
                        class: "navbar__course",
                        href: PLACEHOLDER_HREF,
                        role: "menuitem",
                        "{course}"
                    }
                }
            }
        }
    }
}

/// Placeholder actions; neither button is wired to anything yet.
#[component]
fn AuthActions(stacked: bool) -> Element {
    let login_class = if stacked {
        "navbar__login navbar__login--stacked"
    } else {
        "navbar__login"
    };
    let signup_class = if stacked {
        "button button--primary navbar__signup navbar__signup--stacked"
    } else {
        "button button--primary navbar__signup"
    };

    rsx! {
        button { r#type: "button", class: "{login_class}", "Login" }
        button { r#type: "button", class: "{signup_class}",
            GlyphIcon { glyph: Glyph::LogIn }
            "Sign Up"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ambient::DROPDOWN_SELECTOR;

    #[component]
    fn OpenDropdown() -> Element {
        let state = use_signal(|| NavState {
            is_dropdown_open: true,
            ..NavState::default()
        });
        rsx! {
            DesktopNav { state }
            MobileNav { state }
        }
    }

    #[component]
    fn ClosedDropdown() -> Element {
        let state = use_signal(NavState::default);
        rsx! {
            DesktopNav { state }
            MobileNav { state }
        }
    }

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn marker_attribute() -> &'static str {
        DROPDOWN_SELECTOR.trim_start_matches('[').trim_end_matches(']')
    }

    #[test]
    fn open_dropdown_renders_every_course_link_in_order() {
        let html = render(OpenDropdown);

        // Desktop dropdown and mobile block each list 4 subjects x 4 courses.
        assert_eq!(html.matches(r#"class="navbar__course""#).count(), 32);
        assert_eq!(html.matches(r#"class="navbar__subject""#).count(), 4);
        assert_eq!(
            html.matches(r#"class="navbar__subject navbar__subject--compact""#)
                .count(),
            4
        );

        let desktop = &html[..html.find("navbar-mobile").expect("mobile panel")];
        let mut cursor = 0;
        for subject in SUBJECTS.iter() {
            for name in std::iter::once(subject.title).chain(subject.courses.iter().copied()) {
                let at = desktop[cursor..]
                    .find(&format!(">{name}<"))
                    .unwrap_or_else(|| panic!("`{name}` missing or out of order"));
                cursor += at;
            }
        }
    }

    #[test]
    fn closed_dropdown_renders_no_courses() {
        let html = render(ClosedDropdown);
        assert!(!html.contains("navbar__dropdown"));
        assert!(!html.contains("navbar__course"));
        assert!(html.contains(">Courses<") || html.contains(">Courses"));
    }

    #[test]
    fn both_courses_regions_carry_the_dropdown_marker() {
        let attribute = marker_attribute();
        for html in [render(OpenDropdown), render(ClosedDropdown)] {
            assert!(html.contains(&format!(r#"{attribute}="desktop""#)), "{html}");
            assert!(html.contains(&format!(r#"{attribute}="mobile""#)), "{html}");
        }
    }
}
