use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthTab {
    Login,
    Register,
}

#[derive(Props, PartialEq, Clone)]
pub struct AuthTabsProps {
    pub active: AuthTab,
}

/// Login/Register tab strip shared by both auth pages.
#[component]
pub fn AuthTabs(props: AuthTabsProps) -> Element {
    let (login_class, register_class) = match props.active {
        AuthTab::Login => ("auth-tab active", "auth-tab"),
        AuthTab::Register => ("auth-tab", "auth-tab active"),
    };

    rsx! {
        div {
            class: "auth-tabs",
            if props.active == AuthTab::Login {
                div { class: "{login_class}", "Login" }
                a { class: "{register_class}", href: "/register", "Register" }
            } else {
                a { class: "{login_class}", href: "/login", "Login" }
                div { class: "{register_class}", "Register" }
            }
        }
    }
}
