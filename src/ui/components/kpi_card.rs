use dioxus::prelude::*;

use crate::domain::Scenario;
use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    scenario: Scenario,
) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border(scenario)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(scenario)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_primary(scenario)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(scenario)}", "{desc}" }
            }
        }
    }
}
