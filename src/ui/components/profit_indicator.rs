use dioxus::prelude::*;

/// Status card for a single calculated result: how much, which way, and the
/// one-line explanation under it (usually the break-even position).
#[component]
pub fn ProfitIndicator(value: String, profit: f64, caption: String) -> Element {
    let (label, theme) = if profit > 0.0 {
        (
            "Above break-even",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        )
    } else if profit < 0.0 {
        (
            "Below break-even",
            "border-rose-500/40 bg-rose-500/10 text-rose-200",
        )
    } else {
        (
            "At break-even",
            "border-amber-500/40 bg-amber-500/10 text-amber-200",
        )
    };

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Profit" }
                span { class: "text-xs font-semibold uppercase", "{label}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{value}" }
            p { class: "mt-1 text-xs opacity-80", "{caption}" }
        }
    }
}
