use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AssistanceCardProps {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub supported: u32,
    pub needed: u32,
}

/// Assistance offer with an availability badge and a support progress bar.
#[component]
pub fn AssistanceCard(props: AssistanceCardProps) -> Element {
    let percent = if props.needed == 0 {
        0.0
    } else {
        (props.supported as f64 / props.needed as f64) * 100.0
    };

    rsx! {
        div {
            class: "card assistance-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{props.title}" }
                span { class: "card-badge available", "Available" }
            }
            p { class: "card-description", "{props.description}" }

            div {
                class: "progress-section",
                div {
                    class: "progress-caption",
                    span { "Support Status" }
                    span { "{props.supported}/{props.needed}" }
                }
                div {
                    class: "progress-track",
                    div {
                        class: "progress-fill assistance",
                        style: "width: {percent}%;"
                    }
                }
            }

            div { class: "card-meta", "{props.location}" }

            div {
                class: "card-actions",
                button { class: "button assistance", "Contribute Now" }
                a {
                    class: "button outline",
                    href: "/assistance/{props.id}",
                    "View Details"
                }
            }
        }
    }
}
