use dioxus::prelude::*;

use crate::catalog::SUBJECTS;

/// Page body shown under the navigation bar in every shell.
#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "page page-landing",
            section { class: "page__hero",
                h2 { "Learn with coaches who know the subject inside out" }
                p {
                    "Small-group coaching across mathematics and the sciences. "
                    "Pick a subject from the Courses menu to see what we teach."
                }
            }

            section { class: "page__section",
                div { class: "page__grid",
                    for subject in SUBJECTS.iter() {
                        article { key: "{subject.title}", class: "page__card",
                            h3 { "{subject.title}" }
                            ul {
                                for course in subject.courses.iter() {
                                    li { key: "{course}", "{course}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
