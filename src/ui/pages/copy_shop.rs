//! Copy shop panel: fleet-size profit matrix, equipment sizing, and the
//! side-by-side view of the two capacity-capping rules.

use dioxus::prelude::*;

use crate::domain::{
    input, AppState, ModelError, Scenario, DAYS_PER_YEAR, DEFAULT_DAILY_DEMANDS,
    DEFAULT_FLEET_SIZES,
};
use crate::ui::components::{
    kpi_card::KpiCard,
    matrix_table::{MatrixTable, MatrixTableRow},
    profit_indicator::ProfitIndicator,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format;

const SCENARIO: Scenario = Scenario::CopyShop;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CopyShopTab {
    FleetMatrix,
    Sizing,
    CapacityModels,
}

#[derive(Clone, PartialEq)]
struct SizingResult {
    machines: u32,
    copies: Result<f64, ModelError>,
}

#[component]
pub fn CopyShopPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let model = state.with(|st| st.copy_shop);
    let constants = *model.constants();

    let tab = use_signal(|| CopyShopTab::FleetMatrix);
    let current_tab = tab();

    let machines_input = use_signal(|| "3".to_string());
    let mut sizing = use_signal(|| None::<SizingResult>);

    let mut demand_input = use_signal(|| "500".to_string());
    let mut applied_demand = use_signal(|| 500.0_f64);

    let on_size_fleet = {
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            match input::parse_positive_count(
                "Rented machines",
                "a whole number of at least 1",
                &machines_input(),
            ) {
                Ok(machines) => sizing.set(Some(SizingResult {
                    machines,
                    copies: model.break_even_copies(machines),
                })),
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let on_apply_demand = {
        let toasts = toasts.clone();
        move |_| {
            match input::parse_amount("Daily demand", "a non-negative number of copies", &demand_input()) {
                Ok(demand) => applied_demand.set(demand),
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let tab_body = match current_tab {
        CopyShopTab::FleetMatrix => {
            let matrix = model.fleet_demand_matrix(&DEFAULT_DAILY_DEMANDS, &DEFAULT_FLEET_SIZES);
            let export_json = serde_json::to_string_pretty(&matrix).unwrap_or_default();
            let column_headers: Vec<String> = DEFAULT_FLEET_SIZES
                .iter()
                .map(|machines| {
                    if *machines == 1 {
                        "1 machine".to_string()
                    } else {
                        format!("{machines} machines")
                    }
                })
                .collect();
            let rows: Vec<MatrixTableRow> = matrix
                .iter()
                .map(|row| MatrixTableRow {
                    parameter: format!("{}/day", format::count(row.parameter)),
                    cells: row
                        .cells
                        .iter()
                        .map(|profit| (*profit, format::dollars(*profit)))
                        .collect(),
                })
                .collect();
            rsx! {
                div { class: "space-y-4",
                    p { class: "text-sm text-slate-400",
                        "Annual profit with demand split evenly across the fleet, each machine capped at its own annual capacity. More machines only help while there is demand to feed them."
                    }
                    MatrixTable {
                        corner_header: "Demand / Fleet".to_string(),
                        column_headers,
                        rows,
                        scenario: SCENARIO,
                        export_json,
                    }
                }
            }
        }
        CopyShopTab::Sizing => rsx! {
            SizingTab {
                machines_input,
                on_size_fleet,
                sizing: sizing(),
            }
        },
        CopyShopTab::CapacityModels => {
            let demand = applied_demand();
            let column_headers = vec![
                "Per-machine cap".to_string(),
                "Pooled cap".to_string(),
                "Gap".to_string(),
            ];
            let rows: Vec<MatrixTableRow> = DEFAULT_FLEET_SIZES
                .iter()
                .map(|&machines| {
                    let per_machine = model.fleet_profit(machines, demand);
                    let pooled = model.pooled_profit(machines, demand);
                    let gap = pooled - per_machine;
                    MatrixTableRow {
                        parameter: if machines == 1 {
                            "1 machine".to_string()
                        } else {
                            format!("{machines} machines")
                        },
                        cells: vec![
                            (per_machine, format::dollars(per_machine)),
                            (pooled, format::dollars(pooled)),
                            (gap, format::dollars(gap)),
                        ],
                    }
                })
                .collect();
            let export_rows: Vec<serde_json::Value> = DEFAULT_FLEET_SIZES
                .iter()
                .map(|&machines| {
                    serde_json::json!({
                        "machines": machines,
                        "per_machine_cap": model.fleet_profit(machines, demand),
                        "pooled_cap": model.pooled_profit(machines, demand),
                    })
                })
                .collect();
            let export_json = serde_json::to_string_pretty(&export_rows).unwrap_or_default();
            let demand_note = format!(
                "Comparing both capping rules at {} copies a day",
                format::count(demand)
            );
            rsx! {
                div { class: "space-y-4",
                    p { class: "text-sm text-slate-400",
                        "The per-machine rule splits demand across the fleet and rounds each share down to whole copies; the pooled rule caps raw demand against total capacity. The gap column is the profit the rounding gives away, and it closes only when demand divides evenly or capacity binds."
                    }
                    div {
                        class: "flex flex-wrap items-end gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                        div { class: "w-48",
                            label { class: "{theme::label_class(SCENARIO)}", "Daily demand (copies)" }
                            input {
                                class: "{theme::input_class(SCENARIO)}",
                                inputmode: "numeric",
                                value: demand_input(),
                                oninput: move |evt| demand_input.set(evt.value()),
                            }
                        }
                        button {
                            class: "{theme::btn_primary(SCENARIO)}",
                            onclick: on_apply_demand,
                            "Recalculate"
                        }
                        span { class: "text-xs text-slate-500", "{demand_note}" }
                    }
                    MatrixTable {
                        corner_header: "Fleet / Capping Rule".to_string(),
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
                    title: "Per machine".to_string(),
                    value: format!("{}/year", format::dollars(constants.rental_cost_per_machine)),
                    description: Some(format!(
                        "capacity {} copies a year",
                        format::count(constants.per_machine_annual_capacity)
                    )),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "Fixed overhead".to_string(),
                    value: format!("{}/year", format::dollars(constants.fixed_overhead_per_year)),
                    description: Some("Rent and utilities, fleet-independent".to_string()),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "Margin per copy".to_string(),
                    value: format::dollars(constants.per_copy_revenue - constants.per_copy_cost),
                    description: Some(format!(
                        "{} charged − {} toner and paper",
                        format::dollars(constants.per_copy_revenue),
                        format::dollars(constants.per_copy_cost)
                    )),
                    scenario: SCENARIO,
                }
            }

            section {
                class: "flex flex-wrap gap-2",
                TabButton { tab, target: CopyShopTab::FleetMatrix, label: "Fleet Profit" }
                TabButton { tab, target: CopyShopTab::Sizing, label: "Equipment Sizing" }
                TabButton { tab, target: CopyShopTab::CapacityModels, label: "Capacity Rules" }
            }

            {tab_body}
        }
    }
}

#[component]
fn TabButton(tab: Signal<CopyShopTab>, target: CopyShopTab, label: &'static str) -> Element {
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

#[component]
fn SizingTab(
    machines_input: Signal<String>,
    on_size_fleet: EventHandler<FormEvent>,
    sizing: Option<SizingResult>,
) -> Element {
    let mut machines_input = machines_input;
    rsx! {
        section {
            class: "grid gap-6 lg:grid-cols-[1fr,1fr]",
            form {
                class: "flex flex-col gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                onsubmit: move |evt| on_size_fleet.call(evt),
                p { class: "text-sm text-slate-400",
                    "How many copies must this fleet sell in a year before the rental bill and overhead are covered?"
                }
                div { class: "w-48",
                    label { class: "{theme::label_class(SCENARIO)}", "Rented machines" }
                    input {
                        class: "{theme::input_class(SCENARIO)}",
                        inputmode: "numeric",
                        value: machines_input(),
                        oninput: move |evt| machines_input.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary(SCENARIO)} self-start",
                    r#type: "submit",
                    "Calculate"
                }
            }

            if let Some(result) = sizing {
                SizingOutcome { result }
            } else {
                div {
                    class: "flex items-center justify-center rounded-xl border border-dashed border-slate-800 p-8 text-sm text-slate-500",
                    "Pick a fleet size, then calculate."
                }
            }
        }
    }
}

#[component]
fn SizingOutcome(result: SizingResult) -> Element {
    let state = use_context::<Signal<AppState>>();
    let model = state.with(|st| st.copy_shop);

    match result.copies {
        Ok(copies) => {
            let daily = copies / DAYS_PER_YEAR;
            let capacity = model.fleet_capacity(result.machines);
            // Round-tripping copies through a daily rate leaves float dust;
            // snap it so the card reads $0.00 at exact break-even.
            let profit_at_break_even = {
                let profit = model.pooled_profit(result.machines, daily);
                if profit.abs() < 1e-6 {
                    0.0
                } else {
                    profit
                }
            };
            let caption = if copies > capacity {
                format!(
                    "needs {} copies but the fleet tops out at {}, so this fleet can never break even",
                    format::count(copies),
                    format::count(capacity)
                )
            } else {
                format!(
                    "{} copies a day keeps this fleet exactly at break-even",
                    format::count(daily)
                )
            };
            rsx! {
                div { class: "space-y-4",
                    div {
                        class: "grid gap-3 sm:grid-cols-2",
                        SizingStat {
                            label: "Break-even copies per year",
                            value: format::count(copies),
                        }
                        SizingStat {
                            label: "Implied daily demand",
                            value: format!("{}/day", format::count(daily)),
                        }
                        SizingStat {
                            label: "Fleet capacity per year",
                            value: format::count(capacity),
                        }
                        SizingStat {
                            label: "Rented machines",
                            value: format::count(result.machines as f64),
                        }
                    }
                    ProfitIndicator {
                        value: format::dollars(profit_at_break_even),
                        profit: profit_at_break_even,
                        caption,
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

#[component]
fn SizingStat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-slate-800/60 bg-slate-950/80 p-3",
            p { class: "text-[10px] font-semibold uppercase tracking-wide text-slate-500", "{label}" }
            p { class: "text-lg font-semibold text-slate-100", "{value}" }
        }
    }
}
