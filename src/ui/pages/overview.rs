//! Landing screen: pick a business to take apart.

use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Scenario;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn OverviewPage() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-slate-950 p-8 font-sans text-slate-100",
            div {
                class: "max-w-4xl w-full",
                div { class: "text-center mb-12",
                    h1 {
                        class: "text-4xl font-bold text-slate-100 mb-3",
                        "{APP_NAME}"
                    }
                    p {
                        class: "text-xl text-slate-400",
                        "Three small businesses, one question: when does it pay off?"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    ScenarioCard {
                        scenario: Scenario::Lemonade,
                        description: "A weekly stand selling one product at one price. The gentlest start on fixed versus variable cost.",
                        features: vec![
                            "Profit for any volume and unit cost",
                            "Break-even volume in cups",
                            "Volume × cost sensitivity matrix",
                        ],
                        on_select: move |_| { nav.push(Route::Lemonade {}); },
                    }

                    ScenarioCard {
                        scenario: Scenario::Broadway,
                        description: "An 800-seat house paying back a five-million development bill, eight shows a week.",
                        features: vec![
                            "Weeks until the backers double up",
                            "Profit across occupancy levels",
                            "Ticket price × run length matrix",
                        ],
                        on_select: move |_| { nav.push(Route::Broadway {}); },
                    }

                    ScenarioCard {
                        scenario: Scenario::CopyShop,
                        description: "Rented copiers with a hard annual capacity each. Sizing the fleet is the whole game.",
                        features: vec![
                            "Profit per fleet size and demand",
                            "Break-even copies for a fleet",
                            "Two capacity rules, side by side",
                        ],
                        on_select: move |_| { nav.push(Route::CopyShop {}); },
                    }
                }

                div { class: "text-center mt-12",
                    p { class: "text-sm text-slate-600",
                        "All figures recompute instantly; nothing is stored between sessions."
                    }
                    p { class: "mt-1 text-xs text-slate-700", "{version_label()}" }
                }
            }
        }
    }
}

#[component]
fn ScenarioCard(
    scenario: Scenario,
    description: &'static str,
    features: Vec<&'static str>,
    on_select: EventHandler<()>,
) -> Element {
    let border_color = match scenario {
        Scenario::Lemonade => "border-amber-500/30 hover:border-amber-500/60 hover:bg-amber-500/5",
        Scenario::Broadway => "border-violet-500/30 hover:border-violet-500/60 hover:bg-violet-500/5",
        Scenario::CopyShop => "border-sky-500/30 hover:border-sky-500/60 hover:bg-sky-500/5",
    };

    let accent_color = match scenario {
        Scenario::Lemonade => "text-amber-400",
        Scenario::Broadway => "text-violet-400",
        Scenario::CopyShop => "text-sky-400",
    };

    rsx! {
        div {
            class: "group relative rounded-2xl border-2 p-6 cursor-pointer transition-all duration-200 {border_color} bg-slate-900/60",
            onclick: move |_| on_select.call(()),

            div {
                class: "text-5xl mb-4 transition-transform group-hover:scale-110",
                "{scenario.emoji()}"
            }

            h2 {
                class: "text-2xl font-bold {accent_color} mb-2",
                "{scenario.name()}"
            }

            p {
                class: "text-sm text-slate-400 mb-4",
                "{description}"
            }

            ul { class: "space-y-1",
                for feature in features {
                    li {
                        class: "text-xs text-slate-500 flex items-center gap-2",
                        span { class: "text-slate-600", "›" }
                        "{feature}"
                    }
                }
            }

            div {
                class: "mt-6 text-center opacity-0 group-hover:opacity-100 transition-opacity",
                span {
                    class: "text-xs font-semibold {accent_color} uppercase tracking-wide",
                    "Open →"
                }
            }
        }
    }
}
