//! Broadway panel: payback period, occupancy sensitivity, and the
//! ticket-price × run-length matrix.

use dioxus::prelude::*;

use crate::domain::{
    input, AppState, Scenario, DEFAULT_OCCUPANCIES, DEFAULT_OPERATING_WEEKS, DEFAULT_RUN_LENGTHS,
    DEFAULT_TICKET_PRICES,
};
use crate::ui::components::{
    kpi_card::KpiCard,
    matrix_table::{MatrixTable, MatrixTableRow},
    sweep_table::{SweepTable, SweepTableRow},
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format;

const SCENARIO: Scenario = Scenario::Broadway;

#[derive(Clone, Copy, PartialEq, Eq)]
enum BroadwayTab {
    Payback,
    Occupancy,
    PriceWeeks,
}

#[component]
pub fn BroadwayPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let model = state.with(|st| st.theater);
    let constants = *model.constants();

    let tab = use_signal(|| BroadwayTab::Payback);
    let current_tab = tab();

    let mut weeks_input = use_signal(|| DEFAULT_OPERATING_WEEKS.to_string());
    let mut applied_weeks = use_signal(|| DEFAULT_OPERATING_WEEKS);

    let on_apply_weeks = {
        let toasts = toasts.clone();
        move |_| {
            match input::parse_count("Operating weeks", "a whole number of weeks", &weeks_input()) {
                Ok(weeks) => applied_weeks.set(weeks),
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let tab_body = match current_tab {
        BroadwayTab::Payback => {
            let seats_per_show = constants.capacity as f64 * constants.baseline_occupancy;
            match model.weeks_for_full_return() {
                Ok(weeks) => {
                    let weeks_display = format!("{weeks:.2} weeks");
                    let seats_note = format!(
                        "{} of {} seats at {}",
                        format::count(seats_per_show),
                        format::count(constants.capacity as f64),
                        format::dollars(constants.ticket_price)
                    );
                    rsx! {
                        div { class: "space-y-4",
                            p { class: "text-sm text-slate-400",
                                "How long the box office needs to return the development money twice over, assuming the house keeps selling at its baseline occupancy."
                            }
                            section {
                                class: "grid gap-4 sm:grid-cols-3",
                                KpiCard {
                                    title: "Weeks to full return".to_string(),
                                    value: weeks_display,
                                    description: Some("Revenue target ÷ weekly ticket revenue".to_string()),
                                    scenario: SCENARIO,
                                }
                                KpiCard {
                                    title: "Revenue per week".to_string(),
                                    value: format::dollars(model.revenue_per_week()),
                                    description: Some(seats_note),
                                    scenario: SCENARIO,
                                }
                                KpiCard {
                                    title: "Revenue target".to_string(),
                                    value: format::dollars(model.full_return_target()),
                                    description: Some("Twice the development cost".to_string()),
                                    scenario: SCENARIO,
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    let reason = err.to_string();
                    rsx! {
                        div {
                            class: "rounded-xl border border-rose-500/40 bg-rose-500/10 p-6 text-sm text-rose-200",
                            "{reason}"
                        }
                    }
                }
            }
        }
        BroadwayTab::Occupancy => {
            let weeks = applied_weeks();
            let rows = model.sweep_occupancy(&DEFAULT_OCCUPANCIES, weeks);
            let export_json = serde_json::to_string_pretty(&rows).unwrap_or_default();
            let table_rows: Vec<SweepTableRow> = rows
                .iter()
                .map(|row| SweepTableRow {
                    parameter: format::percent(row.parameter),
                    profit: row.profit,
                    profit_label: format::dollars(row.profit),
                })
                .collect();
            let run_note = format!("Profit over a {weeks}-week run, dealer margin included");
            rsx! {
                div { class: "space-y-4",
                    div {
                        class: "flex flex-wrap items-end gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                        div { class: "w-48",
                            label { class: "{theme::label_class(SCENARIO)}", "Operating weeks" }
                            input {
                                class: "{theme::input_class(SCENARIO)}",
                                inputmode: "numeric",
                                value: weeks_input(),
                                oninput: move |evt| weeks_input.set(evt.value()),
                            }
                        }
                        button {
                            class: "{theme::btn_primary(SCENARIO)}",
                            onclick: on_apply_weeks,
                            "Recalculate"
                        }
                        span { class: "text-xs text-slate-500", "{run_note}" }
                    }
                    SweepTable {
                        parameter_header: "Seats Filled".to_string(),
                        rows: table_rows,
                        scenario: SCENARIO,
                        export_json,
                    }
                }
            }
        }
        BroadwayTab::PriceWeeks => {
            let matrix = model.price_weeks_matrix(&DEFAULT_TICKET_PRICES, &DEFAULT_RUN_LENGTHS);
            let export_json = serde_json::to_string_pretty(&matrix).unwrap_or_default();
            let column_headers: Vec<String> = DEFAULT_RUN_LENGTHS
                .iter()
                .map(|weeks| format!("{weeks} weeks"))
                .collect();
            let rows: Vec<MatrixTableRow> = matrix
                .iter()
                .map(|row| MatrixTableRow {
                    parameter: format::dollars(row.parameter),
                    cells: row
                        .cells
                        .iter()
                        .map(|profit| (*profit, format::dollars(*profit)))
                        .collect(),
                })
                .collect();
            let occupancy_note = format!(
                "Every cell assumes the baseline {} occupancy.",
                format::percent(constants.baseline_occupancy)
            );
            rsx! {
                div { class: "space-y-4",
                    p { class: "text-sm text-slate-400", "{occupancy_note}" }
                    MatrixTable {
                        corner_header: "Ticket Price / Run".to_string(),
                        column_headers,
                        rows,
                        scenario: SCENARIO,
                        export_json,
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Development cost".to_string(),
                    value: format::dollars(constants.development_cost),
                    description: Some("Spent before the first curtain".to_string()),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "House".to_string(),
                    value: format!(
                        "{} seats × {} shows",
                        format::count(constants.capacity as f64),
                        constants.shows_per_week
                    ),
                    description: Some(format!(
                        "baseline occupancy {}",
                        format::percent(constants.baseline_occupancy)
                    )),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "Per ticket".to_string(),
                    value: format::dollars(constants.ticket_price + constants.dealer_profit_per_ticket),
                    description: Some(format!(
                        "{} list + {} dealer margin",
                        format::dollars(constants.ticket_price),
                        format::dollars(constants.dealer_profit_per_ticket)
                    )),
                    scenario: SCENARIO,
                }
            }

            section {
                class: "flex flex-wrap gap-2",
                TabButton { tab, target: BroadwayTab::Payback, label: "Payback Period" }
                TabButton { tab, target: BroadwayTab::Occupancy, label: "Occupancy Sweep" }
                TabButton { tab, target: BroadwayTab::PriceWeeks, label: "Price × Run Matrix" }
            }

            {tab_body}
        }
    }
}

#[component]
fn TabButton(tab: Signal<BroadwayTab>, target: BroadwayTab, label: &'static str) -> Element {
    let active = tab() == target;
    let class = if active {
        theme::btn_tab_active(SCENARIO)
    } else {
        theme::btn_tab_inactive(SCENARIO)
    };
    rsx! {
        button {
            class: "{class}",
            onclick: {
                let mut tab = tab.clone();
                move |_| tab.set(target)
            },
            "{label}"
        }
    }
}
