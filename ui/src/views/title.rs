use dioxus::prelude::*;

/// Opening slide. The start button stays disabled until both datasets have
/// loaded; a failed load leaves the dashboard here for good.
#[component]
pub fn TitleSlide(loading: bool, error: Option<String>, on_start: EventHandler<()>) -> Element {
    let ready = !loading && error.is_none();

    rsx! {
        section { id: "title-slide", class: "page title-slide",
            h1 { {crate::t!("title-heading")} }
            p { class: "title-slide__intro", {crate::t!("title-intro")} }

            ul { class: "title-slide__scenes",
                li { {crate::t!("scene-artists-title")} }
                li { {crate::t!("scene-genres-title")} }
                li { {crate::t!("scene-streams-title")} }
            }

            button {
                id: "start",
                r#type: "button",
                class: "button button--primary",
                disabled: !ready,
                onclick: move |_| on_start.call(()),
                {crate::t!("button-start")}
            }

            if loading {
                p { class: "title-slide__status", {crate::t!("title-loading")} }
            }
            if let Some(err) = error {
                div { class: "title-slide__error",
                    p { "⚠️ " {crate::t!("title-load-failed")} }
                    code { "{err}" }
                }
            }
        }
    }
}
