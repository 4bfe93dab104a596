//! One column of the nationwide county ranking table.

use dioxus::prelude::*;
use faw_stats::ranking::RankedCounty;

#[derive(Props, Clone, PartialEq)]
pub struct CountyRankTableProps {
    /// Ranked rows for this column.
    pub rows: Vec<RankedCounty>,
    /// Whether to render the header row (the narrow layout omits it).
    #[props(default = true)]
    pub with_header: bool,
}

/// One `fraud-table` column. Each row carries its severity tier class
/// (`level-high` / `level-mid` / `level-low`) for the stylesheet.
#[component]
pub fn CountyRankTable(props: CountyRankTableProps) -> Element {
    rsx! {
        table {
            class: "fraud-table",
            if props.with_header {
                thead {
                    class: "hide-on-mobile",
                    tr {
                        th { "縣市" }
                        th { "問答件數" }
                    }
                }
            }
            tbody {
                for row in props.rows.iter() {
                    {
                        let tier_class = row.tier.css_class();
                        rsx! {
                            tr {
                                key: "{row.name}",
                                class: "{tier_class}",
                                td {
                                    class: "county-name",
                                    span { class: "left-color" }
                                    "{row.name}"
                                }
                                td {
                                    class: "count",
                                    "{row.count}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
