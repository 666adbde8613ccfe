use dioxus::prelude::*;

/// Small pill saying whether a figure is a surplus, a loss, or dead even.
#[component]
pub fn ProfitBadge(profit: f64) -> Element {
    let (label, color) = if profit > 0.0 {
        (
            "Surplus",
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        )
    } else if profit < 0.0 {
        ("Loss", "bg-rose-500/10 text-rose-300 border-rose-500/40")
    } else {
        ("Even", "bg-slate-700/40 text-slate-300 border-slate-600/60")
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
        }
    }
}
