//! Lemonade stand panel: manual calculation, volume sweep, and the
//! volume × variable-cost matrix.

use dioxus::prelude::*;

use crate::domain::{
    input, AppState, ModelError, ProfitResult, Scenario, DEFAULT_SALES_VOLUMES,
    DEFAULT_VARIABLE_COSTS,
};
use crate::ui::components::{
    kpi_card::KpiCard,
    matrix_table::{MatrixTable, MatrixTableRow},
    profit_indicator::ProfitIndicator,
    sweep_table::{SweepTable, SweepTableRow},
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format;

const SCENARIO: Scenario = Scenario::Lemonade;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LemonadeTab {
    Manual,
    VolumeSweep,
    CostMatrix,
}

#[derive(Clone, PartialEq)]
struct ManualCalculation {
    volume: u32,
    result: ProfitResult,
    break_even: Result<u32, ModelError>,
}

#[component]
pub fn LemonadePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let model = state.with(|st| st.lemonade);
    let constants = *model.constants();

    let tab = use_signal(|| LemonadeTab::Manual);
    let current_tab = tab();

    let volume_input = use_signal(String::new);
    let cost_input = use_signal(|| format!("{:.2}", constants.default_variable_cost));
    let mut calculation = use_signal(|| None::<ManualCalculation>);

    let mut sweep_cost_input = use_signal(|| format!("{:.2}", constants.default_variable_cost));
    let mut applied_sweep_cost = use_signal(|| constants.default_variable_cost);

    let break_even_display = match model.break_even_volume(constants.default_variable_cost) {
        Ok(volume) => format!("{} cups", format::count(volume as f64)),
        Err(_) => "unreachable".to_string(),
    };

    let on_calculate = {
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let parsed = input::parse_count("Sales volume", "a whole number of cups", &volume_input())
                .and_then(|volume| {
                    input::parse_amount(
                        "Variable cost",
                        "a non-negative amount per cup",
                        &cost_input(),
                    )
                    .map(|cost| (volume, cost))
                });

            match parsed {
                Ok((volume, cost)) => {
                    calculation.set(Some(ManualCalculation {
                        volume,
                        result: model.profit(volume, cost),
                        break_even: model.break_even_volume(cost),
                    }));
                }
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let on_apply_sweep_cost = {
        let toasts = toasts.clone();
        move |_| {
            match input::parse_amount(
                "Variable cost",
                "a non-negative amount per cup",
                &sweep_cost_input(),
            ) {
                Ok(cost) => applied_sweep_cost.set(cost),
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let tab_body = match current_tab {
        LemonadeTab::Manual => rsx! {
            ManualTab {
                volume_input,
                cost_input,
                on_calculate,
                calculation: calculation(),
            }
        },
        LemonadeTab::VolumeSweep => {
            let cost = applied_sweep_cost();
            let rows = model.sweep_by_volume(&DEFAULT_SALES_VOLUMES, cost);
            let export_json = serde_json::to_string_pretty(&rows).unwrap_or_default();
            let table_rows: Vec<SweepTableRow> = rows
                .iter()
                .map(|row| SweepTableRow {
                    parameter: format::count(row.parameter),
                    profit: row.profit,
                    profit_label: format::bolivares(row.profit),
                })
                .collect();
            let cost_note = format!(
                "Showing profits at {} per cup",
                format::bolivares(cost)
            );
            rsx! {
                div { class: "space-y-4",
                    div {
                        class: "flex flex-wrap items-end gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                        div { class: "w-48",
                            label { class: "{theme::label_class(SCENARIO)}", "Variable cost per cup" }
                            input {
                                class: "{theme::input_class(SCENARIO)}",
                                inputmode: "decimal",
                                value: sweep_cost_input(),
                                oninput: move |evt| sweep_cost_input.set(evt.value()),
                            }
                        }
                        button {
                            class: "{theme::btn_primary(SCENARIO)}",
                            onclick: on_apply_sweep_cost,
                            "Recalculate"
                        }
                        span { class: "text-xs text-slate-500", "{cost_note}" }
                    }
                    SweepTable {
                        parameter_header: "Cups Sold".to_string(),
                        rows: table_rows,
                        scenario: SCENARIO,
                        export_json,
                    }
                }
            }
        }
        LemonadeTab::CostMatrix => {
            let matrix = model.volume_cost_matrix(&DEFAULT_SALES_VOLUMES, &DEFAULT_VARIABLE_COSTS);
            let export_json = serde_json::to_string_pretty(&matrix).unwrap_or_default();
            let column_headers: Vec<String> = DEFAULT_VARIABLE_COSTS
                .iter()
                .map(|cost| format::bolivares(*cost))
                .collect();
            let rows: Vec<MatrixTableRow> = matrix
                .iter()
                .map(|row| MatrixTableRow {
                    parameter: format::count(row.parameter),
                    cells: row
                        .cells
                        .iter()
                        .map(|profit| (*profit, format::bolivares(*profit)))
                        .collect(),
                })
                .collect();
            let blurb = format!(
                "Rows are weekly sales volumes, columns are the variable cost of one cup. Watch the loss region spread as the cost climbs toward the {} price.",
                format::bolivares(constants.price_per_cup)
            );
            rsx! {
                div { class: "space-y-4",
                    p { class: "text-sm text-slate-400", "{blurb}" }
                    MatrixTable {
                        corner_header: "Cups / Cup Cost".to_string(),
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
                    title: "Price per cup".to_string(),
                    value: format::bolivares(constants.price_per_cup),
                    description: Some("Fixed for the season".to_string()),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "Fixed cost per week".to_string(),
                    value: format::bolivares(constants.fixed_cost),
                    description: Some("Stand rental and permits".to_string()),
                    scenario: SCENARIO,
                }
                KpiCard {
                    title: "Break-even volume".to_string(),
                    value: break_even_display,
                    description: Some(format!(
                        "at the usual {} cup cost",
                        format::bolivares(constants.default_variable_cost)
                    )),
                    scenario: SCENARIO,
                }
            }

            section {
                class: "flex flex-wrap gap-2",
                TabButton { tab, target: LemonadeTab::Manual, label: "Manual Input" }
                TabButton { tab, target: LemonadeTab::VolumeSweep, label: "Volume Sweep" }
                TabButton { tab, target: LemonadeTab::CostMatrix, label: "Volume × Cost Matrix" }
            }

            {tab_body}
        }
    }
}

#[component]
fn TabButton(tab: Signal<LemonadeTab>, target: LemonadeTab, label: &'static str) -> Element {
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
fn ManualTab(
    volume_input: Signal<String>,
    cost_input: Signal<String>,
    on_calculate: EventHandler<FormEvent>,
    calculation: Option<ManualCalculation>,
) -> Element {
    let mut volume_input = volume_input;
    let mut cost_input = cost_input;
    rsx! {
        section {
            class: "grid gap-6 lg:grid-cols-[1fr,1fr]",
            form {
                class: "flex flex-col gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                onsubmit: move |evt| on_calculate.call(evt),
                div {
                    label { class: "{theme::label_class(SCENARIO)}", "Sales volume (cups)" }
                    input {
                        class: "{theme::input_class(SCENARIO)}",
                        inputmode: "numeric",
                        value: volume_input(),
                        oninput: move |evt| volume_input.set(evt.value()),
                        placeholder: "200",
                    }
                }
                div {
                    label { class: "{theme::label_class(SCENARIO)}", "Variable cost per cup (Bs)" }
                    input {
                        class: "{theme::input_class(SCENARIO)}",
                        inputmode: "decimal",
                        value: cost_input(),
                        oninput: move |evt| cost_input.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary(SCENARIO)} self-start",
                    r#type: "submit",
                    "Calculate Profit"
                }
            }

            if let Some(calc) = calculation {
                ManualResult { calc }
            } else {
                div {
                    class: "flex items-center justify-center rounded-xl border border-dashed border-slate-800 p-8 text-sm text-slate-500",
                    "Enter a volume and cost, then calculate."
                }
            }
        }
    }
}

#[component]
fn ManualResult(calc: ManualCalculation) -> Element {
    let caption = match &calc.break_even {
        Ok(break_even) if calc.volume >= *break_even => format!(
            "clears the break-even volume of {} cups",
            format::count(*break_even as f64)
        ),
        Ok(break_even) => format!(
            "{} cups short of the {} cup break-even",
            format::count((*break_even - calc.volume) as f64),
            format::count(*break_even as f64)
        ),
        Err(err) => err.to_string(),
    };

    rsx! {
        div { class: "space-y-4",
            div {
                class: "grid gap-3 sm:grid-cols-2",
                CostLine { label: "Total revenue", value: format::bolivares(calc.result.revenue) }
                CostLine { label: "Total variable cost", value: format::bolivares(calc.result.variable_cost) }
                CostLine { label: "Total cost (fixed + variable)", value: format::bolivares(calc.result.total_cost) }
                CostLine { label: "Cups sold", value: format::count(calc.volume as f64) }
            }
            ProfitIndicator {
                value: format::bolivares(calc.result.profit),
                profit: calc.result.profit,
                caption,
            }
            p { class: "text-xs text-slate-500",
                "Each extra cup adds its margin straight to profit while the cup cost stays under the price."
            }
        }
    }
}

#[component]
fn CostLine(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-slate-800/60 bg-slate-950/80 p-3",
            p { class: "text-[10px] font-semibold uppercase tracking-wide text-slate-500", "{label}" }
            p { class: "text-lg font-semibold text-slate-100", "{value}" }
        }
    }
}
