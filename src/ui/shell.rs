use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Scenario;
use crate::ui::theme;

#[component]
pub fn Shell(scenario: Scenario, children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "{theme::header_border(scenario)}",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "{scenario.emoji()}" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight {theme::text_primary(scenario)}", "{scenario.name()}" }
                            p { class: "text-xs text-slate-500 italic", "{scenario.tagline()}" }
                        }
                    }

                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: false,
                            onclick: move |_| { nav.push(Route::Overview {}); },
                            label: "🏠 Overview",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Lemonade {}),
                            onclick: move |_| { nav.push(Route::Lemonade {}); },
                            label: "🍋 Lemonade",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Broadway {}),
                            onclick: move |_| { nav.push(Route::Broadway {}); },
                            label: "🎭 Broadway",
                        }
                        NavButton {
                            active: matches!(current_route, Route::CopyShop {}),
                            onclick: move |_| { nav.push(Route::CopyShop {}); },
                            label: "🖨️ Copy Shop",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
