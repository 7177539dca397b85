use dioxus::prelude::*;

use crate::data;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ProfileTab {
    Events,
    Donations,
}

/// Profile page for the mock signed-in user: contact header plus tabs for
/// attended events and pending donations.
#[component]
pub fn Profile() -> Element {
    let mut active_tab = use_signal(|| ProfileTab::Events);
    let profile = data::user_profile();
    let initials = profile.initials();

    rsx! {
        div {
            class: "profile-page",
            div {
                class: "profile-header",
                div { class: "profile-avatar", "{initials}" }
                div {
                    class: "profile-identity",
                    h1 { class: "profile-name", "{profile.name}" }
                    p { class: "profile-contact", "{profile.email}" }
                    p { class: "profile-contact", "{profile.phone}" }
                }
            }

            div {
                class: "browse-tabs",
                button {
                    class: if active_tab() == ProfileTab::Events { "browse-tab active" } else { "browse-tab" },
                    onclick: move |_| active_tab.set(ProfileTab::Events),
                    "My Events"
                }
                button {
                    class: if active_tab() == ProfileTab::Donations { "browse-tab active" } else { "browse-tab" },
                    onclick: move |_| active_tab.set(ProfileTab::Donations),
                    "My Donations"
                }
            }

            {match active_tab() {
                ProfileTab::Events => rsx! {
                    div {
                        class: "profile-list",
                        for event in profile.events.iter() {
                            div {
                                key: "{event.id}",
                                class: "profile-item",
                                div {
                                    class: "profile-item-main",
                                    h3 { class: "profile-item-title", "{event.title}" }
                                    p { class: "profile-item-meta", "{event.location}" }
                                    p { class: "profile-item-meta", "{event.date} · {event.time}" }
                                }
                                span { class: "card-badge event", "{event.status}" }
                            }
                        }
                    }
                },
                ProfileTab::Donations => rsx! {
                    div {
                        class: "profile-list",
                        for donation in profile.donations.iter() {
                            div {
                                key: "{donation.id}",
                                class: "profile-item",
                                div {
                                    class: "profile-item-main",
                                    h3 { class: "profile-item-title", "{donation.organization}" }
                                    for item in donation.items.iter() {
                                        p { class: "profile-item-meta", "{item.quantity}x {item.name}" }
                                    }
                                    p {
                                        class: "profile-item-meta",
                                        "Delivery: {donation.delivery_date}, {donation.delivery_time}"
                                    }
                                }
                                span {
                                    class: if donation.status == "Done" { "card-badge available" } else { "card-badge urgency-medium" },
                                    "{donation.status}"
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
