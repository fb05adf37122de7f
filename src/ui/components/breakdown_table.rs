use dioxus::prelude::*;

use crate::domain::{
    format::{format_dollars, format_share},
    BreakdownLine,
};

#[derive(Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub amount: String,
    pub share: String,
}

impl From<&BreakdownLine> for BreakdownRow {
    fn from(line: &BreakdownLine) -> Self {
        Self {
            label: line.label,
            amount: format_dollars(line.amount),
            share: format_share(line.share),
        }
    }
}

#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>, total: String) -> Element {
    rsx! {
        div {
            class: "breakdown",
            h3 { class: "section-title", "Breakdown" }
            table {
                class: "breakdown-table",
                tbody {
                    for row in rows {
                        tr {
                            td { class: "breakdown-label", "{row.label}:" }
                            td { class: "breakdown-amount", "{row.amount}" }
                            td { class: "breakdown-share", "{row.share}" }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { class: "breakdown-label", "Total UPDC:" }
                        td { class: "breakdown-amount", "{total}" }
                        td {}
                    }
                }
            }
        }
    }
}
