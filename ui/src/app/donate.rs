use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::data;

#[derive(Props, PartialEq, Clone)]
pub struct DonatePageProps {
    pub id: u32,
}

/// Donation page: pick quantities per requested item with stepper buttons,
/// then confirm. Quantities are clamped to what the target still needs.
#[component]
pub fn DonatePage(props: DonatePageProps) -> Element {
    let mut quantities = use_signal(BTreeMap::<u32, u32>::new);
    let mut confirmed = use_signal(|| false);

    let Some(target) = data::donation_target(props.id) else {
        return rsx! {
            div {
                class: "detail-page",
                p { class: "empty-state", "This donation drive has closed." }
                a { class: "button outline", href: "/", "Back to Browse" }
            }
        };
    };

    let total: u32 = quantities().values().sum();

    if confirmed() {
        return rsx! {
            div {
                class: "detail-page",
                div {
                    class: "success-panel",
                    div { class: "success-icon", "✓" }
                    h2 { class: "form-title", "Donation Pledged" }
                    p {
                        class: "form-subtitle",
                        "Thank you! {target.title} has been notified of your \
                         {total} item(s)."
                    }
                    a { class: "button primary", href: "/", "Back to Browse" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "detail-page",
            div {
                class: "detail-header",
                h1 { class: "detail-title", "Donate to {target.title}" }
                p { class: "detail-meta", "{target.location}" }
                p { class: "detail-meta", "Needed by {target.deadline}" }
            }

            div {
                class: "detail-section",
                h2 { class: "detail-section-title", "Requested Items" }
                for item in target.items.iter() {
                    {
                        let item_id = item.id;
                        let max = item.needed;
                        let current = quantities().get(&item_id).copied().unwrap_or(0);
                        rsx! {
                            div {
                                key: "{item_id}",
                                class: "donation-row",
                                div {
                                    class: "donation-item",
                                    span { class: "donation-item-name", "{item.name}" }
                                    if item.urgent {
                                        span { class: "card-badge urgency-high", "Urgent" }
                                    }
                                    span { class: "donation-item-needed", "{item.needed} needed" }
                                }
                                div {
                                    class: "stepper",
                                    button {
                                        class: "stepper-button",
                                        disabled: current == 0,
                                        onclick: move |_| {
                                            quantities.with_mut(|map| {
                                                let entry = map.entry(item_id).or_insert(0);
                                                *entry = entry.saturating_sub(1);
                                            });
                                        },
                                        "−"
                                    }
                                    span { class: "stepper-value", "{current}" }
                                    button {
                                        class: "stepper-button",
                                        disabled: current >= max,
                                        onclick: move |_| {
                                            quantities.with_mut(|map| {
                                                let entry = map.entry(item_id).or_insert(0);
                                                if *entry < max {
                                                    *entry += 1;
                                                }
                                            });
                                        },
                                        "+"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "detail-actions",
                button {
                    class: "button primary",
                    disabled: total == 0,
                    onclick: move |_| confirmed.set(true),
                    "Confirm Donation ({total} item(s))"
                }
                a { class: "button outline", href: "/", "Cancel" }
            }
        }
    }
}
