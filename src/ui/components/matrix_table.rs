use dioxus::prelude::*;

use crate::domain::Scenario;
use crate::ui::theme;

use super::sweep_table::ExportFooter;

/// One rendered row of a 2-D sweep. Cells carry the numeric profit for sign
/// tinting next to the formatted label.
#[derive(Clone, PartialEq)]
pub struct MatrixTableRow {
    pub parameter: String,
    pub cells: Vec<(f64, String)>,
}

#[component]
pub fn MatrixTable(
    corner_header: String,
    column_headers: Vec<String>,
    rows: Vec<MatrixTableRow>,
    scenario: Scenario,
    export_json: String,
) -> Element {
    let show_json = use_signal(|| false);
    let is_empty = rows.is_empty();

    rsx! {
        div {
            class: "{theme::table_container(scenario)}",
            if is_empty {
                p { class: "px-4 py-6 text-sm text-slate-500", "Nothing to cross yet." }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "min-w-full {theme::table_divider(scenario)} text-sm",
                        thead {
                            class: "{theme::table_header(scenario)} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "{corner_header}" }
                                for header in column_headers {
                                    th { class: "px-4 py-3 font-medium text-right whitespace-nowrap", "{header}" }
                                }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider(scenario)}",
                            for row in rows {
                                tr {
                                    class: "hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-slate-100 whitespace-nowrap", "{row.parameter}" }
                                    for (profit, label) in row.cells {
                                        td {
                                            class: "px-4 py-3 text-right whitespace-nowrap {theme::profit_text(profit)}",
                                            "{label}"
                                        }
                                    }
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
