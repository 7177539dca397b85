use dioxus::prelude::*;

/// Top navigation bar with a collapsible mobile menu.
#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    let nav_links = [
        ("/", "Home"),
        ("/about", "About"),
        ("/how-it-works", "How It Works"),
        ("/community", "Community"),
        ("/contact", "Contact"),
    ];

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                a { class: "navbar-brand", href: "/", "Tweeza" }

                nav {
                    class: "navbar-links",
                    for (href, label) in nav_links {
                        a { class: "navbar-link", href, "{label}" }
                    }
                }

                div {
                    class: "navbar-auth",
                    a { class: "button outline", href: "/login", "Login" }
                    a { class: "button primary", href: "/register", "Sign Up" }
                }

                button {
                    class: "navbar-menu-toggle",
                    aria_label: if menu_open() { "Close menu" } else { "Open menu" },
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                div {
                    class: "navbar-mobile",
                    nav {
                        class: "navbar-mobile-links",
                        for (href, label) in nav_links {
                            a {
                                class: "navbar-link",
                                href,
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                    }
                    div {
                        class: "navbar-mobile-auth",
                        a { class: "button outline", href: "/login", "Login" }
                        a { class: "button primary", href: "/register", "Sign Up" }
                    }
                }
            }
        }
    }
}
