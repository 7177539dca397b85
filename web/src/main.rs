use dioxus::prelude::*;
use ui::components::layout::Navbar;

const FAVICON: Asset = asset!("/assets/favicon.png");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/volunteer/:id")]
    Volunteer { id: u32 },
    #[route("/assistance/:id")]
    Assistance { id: u32 },
    #[route("/donate/:id")]
    Donate { id: u32 },
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page-body",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { ui::app::Home {} }
}

#[component]
fn Login() -> Element {
    rsx! { ui::app::Login {} }
}

#[component]
fn Register() -> Element {
    rsx! { ui::app::Register {} }
}

#[component]
fn Profile() -> Element {
    rsx! { ui::app::Profile {} }
}

#[component]
fn Volunteer(id: u32) -> Element {
    rsx! { ui::app::VolunteerDetail { id: id } }
}

#[component]
fn Assistance(id: u32) -> Element {
    rsx! { ui::app::AssistanceDetailPage { id: id } }
}

#[component]
fn Donate(id: u32) -> Element {
    rsx! { ui::app::DonatePage { id: id } }
}
