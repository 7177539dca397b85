use dioxus::prelude::*;

use crate::features::registration::{RegistrationAction, Role};

#[derive(Props, PartialEq, Clone)]
pub struct RoleSelectorProps {
    pub dispatch: EventHandler<RegistrationAction>,
}

/// Step 1: pick a role. Selecting advances straight to the role form; no
/// validation is involved.
#[component]
pub fn RoleSelector(props: RoleSelectorProps) -> Element {
    let dispatch = props.dispatch;

    let options = [
        (Role::Admin, "A", "Admin", "Register as an organization administrator to publish needs"),
        (Role::Traveler, "T", "Traveler", "Register as a traveler to find and offer help on the go"),
        (Role::Volunteer, "V", "Volunteer", "Register as a volunteer to help and contribute"),
    ];

    rsx! {
        div {
            class: "role-grid",
            for (role, letter, title, blurb) in options {
                div {
                    class: "role-option",
                    onclick: move |_| dispatch.call(RegistrationAction::SelectRole(role)),
                    div { class: "role-avatar", "{letter}" }
                    div {
                        h3 { class: "role-title", "{title}" }
                        p { class: "role-blurb", "{blurb}" }
                    }
                }
            }
            div {
                class: "auth-footer",
                span { "Already have an account? " }
                a { class: "auth-link", href: "/login", "Login Now" }
            }
        }
    }
}
