//! Cross-county fraud-method ranking table.

use dioxus::prelude::*;
use faw_stats::ranking::TypeAppearance;

#[derive(Props, Clone, PartialEq)]
pub struct TopTypesTableProps {
    pub rows: Vec<TypeAppearance>,
}

/// The top-5 fraud methods table. The second column counts counties
/// whose top5 mentions the method, not summed case counts.
#[component]
pub fn TopTypesTable(props: TopTypesTableProps) -> Element {
    rsx! {
        table {
            class: "fraud-table",
            thead {
                tr {
                    th { "詐騙手法" }
                    th { "縣市出現數" }
                }
            }
            tbody {
                for (i, row) in props.rows.iter().enumerate() {
                    {
                        let rank_class = format!("fraud-type-{}", i + 1);
                        rsx! {
                            tr {
                                key: "{row.type_name}",
                                class: "{rank_class}",
                                td { "{row.type_name}" }
                                td { "{row.counties}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
