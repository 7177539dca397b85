use dioxus::prelude::*;

use crate::data::Urgency;

#[derive(Props, PartialEq, Clone)]
pub struct EmergencyCardProps {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub supplied: u32,
    pub needed: u32,
    pub deadline: String,
}

/// Emergency need with a supply progress bar and a donate action.
#[component]
pub fn EmergencyCard(props: EmergencyCardProps) -> Element {
    let percent = if props.needed == 0 {
        0.0
    } else {
        (props.supplied as f64 / props.needed as f64) * 100.0
    };
    let badge_class = match props.urgency {
        Urgency::High => "card-badge urgency-high",
        Urgency::Medium => "card-badge urgency-medium",
        Urgency::Low => "card-badge urgency-low",
    };

    rsx! {
        div {
            class: "card emergency-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{props.title}" }
                span { class: "{badge_class}", "{props.urgency.as_str()}" }
            }
            p { class: "card-description", "{props.description}" }

            div {
                class: "progress-section",
                div {
                    class: "progress-caption",
                    span { "Supply Status" }
                    span { "{props.supplied}/{props.needed}" }
                }
                div {
                    class: "progress-track",
                    div {
                        class: "progress-fill emergency",
                        style: "width: {percent}%;"
                    }
                }
            }

            div { class: "card-meta", "Deadline: {props.deadline}" }
            div { class: "card-meta", "{props.location}" }

            div {
                class: "card-actions",
                a {
                    class: "button primary",
                    href: "/donate/{props.id}",
                    "Donate"
                }
                button { class: "button outline", "View Details" }
            }
        }
    }
}
