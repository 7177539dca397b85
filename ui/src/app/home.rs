use dioxus::prelude::*;

use crate::components::cards::{AssistanceCard, EmergencyCard, EventCard};
use crate::components::display::MapPanel;
use crate::data;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BrowseTab {
    Emergency,
    Assistance,
    Events,
}

fn empty_state(message: &str) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}

/// Browse page: the map panel on top, a tab strip, and the card grid for
/// whichever catalog the tab selects.
#[component]
pub fn Home() -> Element {
    let mut active_tab = use_signal(|| BrowseTab::Emergency);

    let tabs = [
        (BrowseTab::Emergency, "Emergency"),
        (BrowseTab::Assistance, "Assistance"),
        (BrowseTab::Events, "Events"),
    ];

    rsx! {
        div {
            class: "home-page",
            MapPanel {}

            div {
                class: "browse-tabs",
                for (tab, label) in tabs {
                    button {
                        class: if active_tab() == tab { "browse-tab active" } else { "browse-tab" },
                        onclick: move |_| active_tab.set(tab),
                        "{label}"
                    }
                }
            }

            div {
                class: "card-grid",
                {match active_tab() {
                    BrowseTab::Emergency => {
                        let items = data::emergencies();
                        if items.is_empty() {
                            empty_state("No emergencies right now.")
                        } else {
                            rsx! {
                                for item in items {
                                    EmergencyCard {
                                        key: "{item.id}",
                                        id: item.id,
                                        title: item.title.to_string(),
                                        description: item.description.to_string(),
                                        location: item.location.to_string(),
                                        urgency: item.urgency,
                                        supplied: item.supplied,
                                        needed: item.needed,
                                        deadline: item.deadline.to_string(),
                                    }
                                }
                            }
                        }
                    }
                    BrowseTab::Assistance => {
                        let items = data::assistance_offers();
                        if items.is_empty() {
                            empty_state("No assistance offers right now.")
                        } else {
                            rsx! {
                                for item in items {
                                    AssistanceCard {
                                        key: "{item.id}",
                                        id: item.id,
                                        title: item.title.to_string(),
                                        description: item.description.to_string(),
                                        location: item.location.to_string(),
                                        supported: item.supported,
                                        needed: item.needed,
                                    }
                                }
                            }
                        }
                    }
                    BrowseTab::Events => {
                        let items = data::community_events();
                        if items.is_empty() {
                            empty_state("No upcoming events right now.")
                        } else {
                            rsx! {
                                for item in items {
                                    EventCard {
                                        key: "{item.id}",
                                        id: item.id,
                                        title: item.title.to_string(),
                                        description: item.description.to_string(),
                                        location: item.location.to_string(),
                                        date: item.date.to_string(),
                                        attendees: item.attendees,
                                    }
                                }
                            }
                        }
                    }
                }}
            }
        }
    }
}
