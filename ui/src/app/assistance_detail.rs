use dioxus::prelude::*;

use crate::data;

#[derive(Props, PartialEq, Clone)]
pub struct AssistanceDetailPageProps {
    pub id: u32,
}

/// Detail view for one assistance offer: services with availability and
/// eligibility notes.
#[component]
pub fn AssistanceDetailPage(props: AssistanceDetailPageProps) -> Element {
    let Some(detail) = data::assistance_detail(props.id) else {
        return rsx! {
            div {
                class: "detail-page",
                p { class: "empty-state", "This assistance offer is no longer available." }
                a { class: "button outline", href: "/", "Back to Browse" }
            }
        };
    };

    rsx! {
        div {
            class: "detail-page",
            div {
                class: "detail-header",
                h1 { class: "detail-title", "{detail.title}" }
                p { class: "detail-meta", "{detail.location}" }
                p { class: "detail-meta", "{detail.date} · {detail.time}" }
            }

            p { class: "detail-description", "{detail.description}" }

            div {
                class: "detail-section",
                h2 { class: "detail-section-title", "Services Offered" }
                for service in detail.services.iter() {
                    div {
                        key: "{service.id}",
                        class: "service-row",
                        span { "{service.name}" }
                        if service.available {
                            span { class: "card-badge available", "Available" }
                        } else {
                            span { class: "card-badge unavailable", "Unavailable" }
                        }
                    }
                }
            }

            div {
                class: "detail-section",
                h2 { class: "detail-section-title", "Eligibility" }
                ul {
                    class: "detail-list",
                    for item in detail.eligibility.iter() {
                        li { "{item}" }
                    }
                }
            }

            div {
                class: "detail-actions",
                button { class: "button assistance", "Request Assistance" }
                a { class: "button outline", href: "/", "Back to Browse" }
            }
        }
    }
}
