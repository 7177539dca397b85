use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::components::layout::{AuthTab, AuthTabs};

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-panel",
                AuthTabs { active: AuthTab::Login }
                h1 { class: "form-title", "Welcome back" }
                LoginForm {}
                div {
                    class: "auth-footer",
                    span { "New to Tweeza? " }
                    a { class: "auth-link", href: "/register", "Create an account" }
                }
            }
        }
    }
}
