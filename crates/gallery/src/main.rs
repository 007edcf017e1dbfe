use controls::{Button, ButtonKind};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Small showcase page for the control library.
#[component]
fn App() -> Element {
    let mut last_action = use_signal(String::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "gallery",
            h1 { "Controls" }
            section {
                h2 { "Button" }
                div { class: "gallery-row",
                    Button {
                        value: "Save",
                        on_click: move |_| {
                            tracing::info!("save clicked");
                            last_action.set("Save".to_string());
                        },
                    }
                    Button {
                        value: "Cancel",
                        kind: ButtonKind::Dashed,
                        on_click: move |_| {
                            tracing::info!("cancel clicked");
                            last_action.set("Cancel".to_string());
                        },
                    }
                    // Inert button with no handler.
                    Button { value: "Inert" }
                }
                if !last_action.read().is_empty() {
                    p { class: "gallery-note", "Last activated: {last_action}" }
                }
            }
        }
    }
}
