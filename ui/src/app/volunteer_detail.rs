use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::data;

#[derive(Props, PartialEq, Clone)]
pub struct VolunteerDetailProps {
    pub id: u32,
}

/// Detail view for one volunteer opportunity with a task checklist. The
/// checklist is page-local; it resets when the page unmounts.
#[component]
pub fn VolunteerDetail(props: VolunteerDetailProps) -> Element {
    let mut checked = use_signal(BTreeSet::<u32>::new);

    let Some(opportunity) = data::volunteer_opportunity(props.id) else {
        return rsx! {
            div {
                class: "detail-page",
                p { class: "empty-state", "This opportunity is no longer available." }
                a { class: "button outline", href: "/", "Back to Browse" }
            }
        };
    };

    let selected = checked().len();

    rsx! {
        div {
            class: "detail-page",
            div {
                class: "detail-header",
                h1 { class: "detail-title", "{opportunity.title}" }
                p { class: "detail-meta", "{opportunity.location}" }
                p { class: "detail-meta", "{opportunity.date} · {opportunity.time}" }
            }

            p { class: "detail-description", "{opportunity.description}" }

            div {
                class: "detail-section",
                h2 { class: "detail-section-title", "Volunteer Tasks" }
                for task in opportunity.tasks.iter() {
                    {
                        let task_id = task.id;
                        let is_checked = checked().contains(&task_id);
                        rsx! {
                            label {
                                key: "{task_id}",
                                class: "task-row",
                                input {
                                    r#type: "checkbox",
                                    checked: is_checked,
                                    onchange: move |_| {
                                        checked.with_mut(|set| {
                                            if !set.remove(&task_id) {
                                                set.insert(task_id);
                                            }
                                        });
                                    }
                                }
                                span { "{task.name}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "detail-section",
                h2 { class: "detail-section-title", "Requirements" }
                ul {
                    class: "detail-list",
                    for requirement in opportunity.requirements.iter() {
                        li { "{requirement}" }
                    }
                }
            }

            div {
                class: "detail-actions",
                button {
                    class: "button primary",
                    disabled: selected == 0,
                    "Sign Up ({selected} task(s))"
                }
                a { class: "button outline", href: "/", "Back to Browse" }
            }
        }
    }
}
