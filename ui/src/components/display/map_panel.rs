use dioxus::prelude::*;

/// Placeholder map area with the search box overlay. Tile rendering is out
/// of scope; the panel keeps the browse page's layout intact.
#[component]
pub fn MapPanel() -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div {
            class: "map-panel",
            div {
                class: "map-search",
                input {
                    class: "map-search-input",
                    r#type: "text",
                    placeholder: "Search locations...",
                    value: "{query}",
                    oninput: move |event| query.set(event.value())
                }
            }
            a {
                class: "map-profile-button",
                href: "/profile",
                aria_label: "Open profile",
                "👤"
            }
            div { class: "map-placeholder" }
        }
    }
}
