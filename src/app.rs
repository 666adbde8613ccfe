use dioxus::prelude::*;

use crate::{
    domain::Scenario,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{BroadwayPage, CopyShopPage, LemonadePage, OverviewPage},
        shell::Shell,
    },
    util::{assets, config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/overview")]
    Overview {},
    #[route("/lemonade")]
    Lemonade {},
    #[route("/broadway")]
    Broadway {},
    #[route("/copy-shop")]
    CopyShop {},
}

#[component]
pub fn App() -> Element {
    // Constants are resolved exactly once per launch; everything after this
    // point treats them as immutable.
    let state = use_signal(config::startup_state);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::utility_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! { OverviewPage {} }
}

#[component]
pub fn Lemonade() -> Element {
    rsx! { Shell { scenario: Scenario::Lemonade, LemonadePage {} } }
}

#[component]
pub fn Broadway() -> Element {
    rsx! { Shell { scenario: Scenario::Broadway, BroadwayPage {} } }
}

#[component]
pub fn CopyShop() -> Element {
    rsx! { Shell { scenario: Scenario::CopyShop, CopyShopPage {} } }
}
