//! Per-county drill-down card shown instead of the nationwide tables.

use dioxus::prelude::*;
use faw_stats::dataset::CountyEntry;

#[derive(Props, Clone, PartialEq)]
pub struct CountyDetailsProps {
    /// The selected county. `top5` is already sorted and capped by the
    /// dataset invariant; zero-value placeholders render an empty list.
    pub entry: CountyEntry,
    /// Back-to-overview control.
    pub on_back: EventHandler<()>,
}

#[component]
pub fn CountyDetails(props: CountyDetailsProps) -> Element {
    let on_back = props.on_back;

    rsx! {
        div {
            id: "county-fraud-details",
            div {
                style: "position: relative; padding: 2rem; background: #fff; border-radius: 16px; box-shadow: 0 4px 12px rgba(0,0,0,0.05);",
                div {
                    style: "position: absolute; top: 1rem; right: 1rem; font-size: 0.9rem; color: #444; cursor: pointer;",
                    onclick: move |_| on_back.call(()),
                    "＜ 返回全國縣市"
                }
                div {
                    style: "text-align: center; margin-bottom: 1rem;",
                    h2 {
                        style: "margin: 0; font-weight: bold; font-size: 1.5rem; color: #007777;",
                        "{props.entry.name}數據統計"
                    }
                }
                div {
                    style: "display: flex; justify-content: center; align-items: center; gap: 4rem; background: #f4f4f4; border-radius: 12px; padding: 1rem 2rem; margin-bottom: 2rem;",
                    div {
                        style: "text-align: center;",
                        div {
                            style: "font-size: 2rem; font-weight: bold; color: #009999;",
                            "{props.entry.count}"
                        }
                        div { "問答件數" }
                    }
                }
                div {
                    style: "background: #444; color: #fff; font-weight: bold; display: flex; justify-content: space-between; align-items: center; padding: 0.8rem 1.5rem; border-radius: 8px 8px 0 0;",
                    div { "詐騙手法前 5 名" }
                    div { "問答件數" }
                }
                for (i, item) in props.entry.top5.iter().enumerate() {
                    {
                        let rank = i + 1;
                        rsx! {
                            div {
                                key: "{item.type_name}",
                                style: "display: flex; justify-content: space-between; align-items: center; background: #fff; border-top: 1px solid #eee; padding: 1rem 1.5rem;",
                                div {
                                    style: "display: flex; align-items: center; gap: 1rem;",
                                    div {
                                        style: "background: #009999; color: #fff; width: 32px; height: 32px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-weight: bold;",
                                        "{rank}"
                                    }
                                    div {
                                        style: "color: #006666; font-weight: bold;",
                                        "{item.type_name}"
                                    }
                                }
                                div {
                                    style: "min-width: 60px; text-align: right; font-weight: 600;",
                                    "{item.count}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
