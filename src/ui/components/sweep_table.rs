use dioxus::prelude::*;

use super::profit_badge::ProfitBadge;
use crate::domain::Scenario;
use crate::ui::theme;

/// One rendered row of a 1-D sweep: the formatted parameter, the numeric
/// profit for tinting/summary, and its formatted label.
#[derive(Clone, PartialEq)]
pub struct SweepTableRow {
    pub parameter: String,
    pub profit: f64,
    pub profit_label: String,
}

#[component]
pub fn SweepTable(
    parameter_header: String,
    rows: Vec<SweepTableRow>,
    scenario: Scenario,
    export_json: String,
) -> Element {
    let show_json = use_signal(|| false);
    let is_empty = rows.is_empty();
    let count = rows.len();
    let summary = summarize_rows(&rows);

    rsx! {
        div {
            class: "{theme::table_container(scenario)}",
            if let Some(summary) = summary {
                div {
                    class: "grid gap-4 border-b border-slate-800 bg-slate-900/60 px-4 py-3 text-sm text-slate-200 sm:grid-cols-3",
                    SummaryStat {
                        title: "Best case",
                        value: summary.best.profit_label.clone(),
                        caption: format!("at {} {}", summary.best.parameter, parameter_header.to_lowercase()),
                    }
                    SummaryStat {
                        title: "Worst case",
                        value: summary.worst.profit_label.clone(),
                        caption: format!("at {} {}", summary.worst.parameter, parameter_header.to_lowercase()),
                    }
                    SummaryStat {
                        title: "First non-negative",
                        value: summary
                            .first_even
                            .as_ref()
                            .map(|row| row.parameter.clone())
                            .unwrap_or_else(|| "—".to_string()),
                        caption: match summary.first_even {
                            Some(_) => "break-even reached inside this range".to_string(),
                            None => "every row in this range is a loss".to_string(),
                        },
                    }
                }
            }
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "Profit by {parameter_header}" }
                span { class: "text-xs text-slate-500", "{count} rows" }
            }
            if is_empty {
                p { class: "px-4 py-6 text-sm text-slate-500", "Nothing to sweep yet." }
            } else {
                table {
                    class: "min-w-full {theme::table_divider(scenario)} text-sm",
                    thead {
                        class: "{theme::table_header(scenario)} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-3 font-medium", "{parameter_header}" }
                            th { class: "px-4 py-3 font-medium text-right", "Profit" }
                            th { class: "px-4 py-3 font-medium text-right", "Status" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider(scenario)}",
                        for row in rows {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3 font-medium text-slate-100", "{row.parameter}" }
                                td {
                                    class: "px-4 py-3 text-right font-medium {theme::profit_text(row.profit)}",
                                    "{row.profit_label}"
                                }
                                td {
                                    class: "px-4 py-3 text-right",
                                    ProfitBadge { profit: row.profit }
                                }
                            }
                        }
                    }
                }
            }
            ExportFooter { scenario, show_json, export_json }
        }
    }
}

struct SweepSummary {
    best: SweepTableRow,
    worst: SweepTableRow,
    first_even: Option<SweepTableRow>,
}

fn summarize_rows(rows: &[SweepTableRow]) -> Option<SweepSummary> {
    let best = rows
        .iter()
        .max_by(|a, b| a.profit.partial_cmp(&b.profit).unwrap())?;
    let worst = rows
        .iter()
        .min_by(|a, b| a.profit.partial_cmp(&b.profit).unwrap())?;
    let first_even = rows.iter().find(|row| row.profit >= 0.0);

    Some(SweepSummary {
        best: best.clone(),
        worst: worst.clone(),
        first_even: first_even.cloned(),
    })
}

#[derive(Props, Clone, PartialEq)]
struct SummaryStatProps {
    title: &'static str,
    value: String,
    caption: String,
}

#[component]
fn SummaryStat(props: SummaryStatProps) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-slate-800/60 bg-slate-950/80 p-3",
            p { class: "text-[10px] font-semibold uppercase tracking-wide text-slate-500", "{props.title}" }
            p { class: "text-lg font-semibold text-slate-100", "{props.value}" }
            p { class: "text-xs text-slate-500", "{props.caption}" }
        }
    }
}

/// Footer shared by the result tables: a toggle that reveals the rows as
/// JSON so students can lift them into a spreadsheet or homework write-up.
#[component]
pub fn ExportFooter(
    scenario: Scenario,
    show_json: Signal<bool>,
    export_json: String,
) -> Element {
    let visible = show_json();
    rsx! {
        div {
            class: "border-t border-slate-800 bg-slate-950/40 px-4 py-2",
            button {
                class: "{theme::link_class(scenario)}",
                onclick: {
                    let mut show_json = show_json.clone();
                    move |_| show_json.set(!visible)
                },
                if visible { "Hide JSON" } else { "Show JSON" }
            }
            if visible {
                pre {
                    class: "mt-2 max-h-64 overflow-auto rounded-lg bg-slate-950 p-3 text-xs text-slate-400",
                    "{export_json}"
                }
            }
        }
    }
}
