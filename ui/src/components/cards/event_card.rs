use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EventCardProps {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub attendees: u32,
}

/// Community event with date, place, and attendee count.
#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    rsx! {
        div {
            class: "card event-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{props.title}" }
                span { class: "card-badge event", "Event" }
            }
            p { class: "card-description", "{props.description}" }

            div { class: "card-meta", "Date: {props.date}" }
            div { class: "card-meta", "{props.location}" }
            div { class: "card-meta", "{props.attendees} People Attending" }

            div {
                class: "card-actions",
                button { class: "button event", "Join Now" }
                a {
                    class: "button outline",
                    href: "/volunteer/{props.id}",
                    "View Details"
                }
            }
        }
    }
}
