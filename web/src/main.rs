use tracing::Level;
use dioxus::prelude::*;

use ui::components::NavigationBar;
use ui::views::Landing;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so web and desktop stay in sync.

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Coaching Hub" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // The navbar picks up the DOM-backed ambient source on its own.
        NavigationBar {}
        Landing {}
    }
}
