//! Scenario-specific theme helpers so the three panels stay visually
//! distinct without repeating class soup in every page.

use crate::domain::Scenario;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-amber-400",
        Scenario::Broadway => "rounded-lg bg-violet-500 px-4 py-2 text-sm font-semibold text-white hover:bg-violet-400",
        Scenario::CopyShop => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
    }
}

pub fn btn_tab_active(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "rounded-lg px-4 py-2 text-sm font-semibold bg-amber-500/20 text-amber-300 border border-amber-500/40",
        Scenario::Broadway => "rounded-lg px-4 py-2 text-sm font-semibold bg-violet-500/20 text-violet-300 border border-violet-500/40",
        Scenario::CopyShop => "rounded-lg px-4 py-2 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
    }
}

pub fn btn_tab_inactive(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-amber-600 hover:text-amber-300",
        Scenario::Broadway => "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-violet-600 hover:text-violet-300",
        Scenario::CopyShop => "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-amber-500 focus:outline-none",
        Scenario::Broadway => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-violet-500 focus:outline-none",
        Scenario::CopyShop => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
    }
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub fn panel_border(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "rounded-xl border border-amber-800/50 bg-slate-900/40",
        Scenario::Broadway => "rounded-xl border border-violet-800/50 bg-slate-900/40",
        Scenario::CopyShop => "rounded-xl border border-sky-800/50 bg-slate-900/40",
    }
}

pub fn table_container(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "rounded-xl border border-amber-900/40 bg-slate-900/40 overflow-hidden",
        Scenario::Broadway => "rounded-xl border border-violet-900/40 bg-slate-900/40 overflow-hidden",
        Scenario::CopyShop => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "border-b border-amber-900/40 bg-amber-950/30 text-xs uppercase text-amber-400/70",
        Scenario::Broadway => "border-b border-violet-900/40 bg-violet-950/30 text-xs uppercase text-violet-400/70",
        Scenario::CopyShop => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
    }
}

pub fn table_divider(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "divide-y divide-amber-900/30",
        Scenario::Broadway => "divide-y divide-violet-900/30",
        Scenario::CopyShop => "divide-y divide-sky-900/30",
    }
}

pub fn header_border(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "border-b border-amber-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Scenario::Broadway => "border-b border-violet-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Scenario::CopyShop => "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "text-amber-300",
        Scenario::Broadway => "text-violet-300",
        Scenario::CopyShop => "text-sky-300",
    }
}

pub fn text_muted(_scenario: Scenario) -> &'static str {
    "text-slate-500"
}

pub fn label_class(_scenario: Scenario) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn link_class(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Lemonade => "text-xs font-semibold uppercase tracking-wide text-amber-300 hover:text-amber-100",
        Scenario::Broadway => "text-xs font-semibold uppercase tracking-wide text-violet-300 hover:text-violet-100",
        Scenario::CopyShop => "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100",
    }
}

/// Profit cells are tinted by sign everywhere, independent of scenario.
pub fn profit_text(profit: f64) -> &'static str {
    if profit < 0.0 {
        "text-rose-300"
    } else {
        "text-emerald-300"
    }
}
