//! Fraud statistics dashboard
//!
//! One `/api/fraud-stats` fetch feeds both the nationwide tables and the
//! interactive county choropleth.
//!
//! Data flow:
//! 1. On mount: fetch the statistics payload, normalize it into the
//!    shared per-county dataset, and flip the readiness latch. On any
//!    fetch or decode failure the latch stays unset and neither
//!    renderer runs.
//! 2. At readiness: build the table view-models once and hand the map
//!    its per-county counts via the D3.js bridge.
//! 3. County clicks come back from the map JS over an eval channel;
//!    selection state lives in Rust and toggles the detail card against
//!    the double table.

use dioxus::document;
use dioxus::prelude::*;

use faw_api::{client, geolocation};
use faw_stats::dataset::{CountyEntry, FraudDataset};
use faw_stats::ranking::{self, RankedCounty, TypeAppearance};
use faw_stats::selection;
use faw_ui::components::{
    site_links, CountyDetails, CountyRankTable, ErrorDisplay, LoadingSpinner, MapContainer,
    NavMenu, SectionHeader, TopTypesTable,
};
use faw_ui::js_bridge;
use faw_ui::state::AppState;
use faw_ui::viewport;

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "taiwan-map";
/// Static county-boundary topology consumed by the map scripts.
const TOPOLOGY_URL: &str = "./static/tw_map.json";
/// Name of the object collection inside the topology file.
const TOPOLOGY_OBJECT: &str = "tw";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fraud-dashboard-root"))
        .launch(App);
}

/// Table view-models, built once at readiness. Later dataset mutation
/// (the lazy zero-entry insert on map selection) must never reshuffle
/// the rendered tables.
#[derive(Clone, PartialEq)]
struct DashboardTables {
    ranking: Vec<RankedCounty>,
    top_types: Vec<TypeAppearance>,
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut tables: Signal<Option<DashboardTables>> = use_signal(|| None);

    // ─── Effect 1: fetch + normalize once on mount ───
    use_effect(move || {
        // Page-load location telemetry, fire-and-forget.
        spawn(async move {
            match geolocation::current_position().await {
                Ok((latitude, longitude)) => client::report_location(latitude, longitude),
                Err(reason) => log::warn!("page-load geolocation unavailable: {reason}"),
            }
        });

        spawn(async move {
            match client::fetch_fraud_stats().await {
                Ok(payload) => state.publish(FraudDataset::from_payload(payload)),
                Err(e) => state.fail(format!("統計資料載入失敗：{e}")),
            }
        });
    });

    // ─── Effect 2: readiness fan-out — tables + map, each rendered once ───
    use_effect(move || {
        if !(state.ready)() {
            return;
        }
        // Untracked dataset read: this effect keys on the latch alone.
        let dataset = state.dataset.peek();

        tables.set(Some(DashboardTables {
            ranking: ranking::nationwide_ranking(&dataset),
            top_types: ranking::type_appearance_ranking(&dataset),
        }));

        js_bridge::init_map();

        let counts: serde_json::Map<String, serde_json::Value> = dataset
            .counties()
            .map(|e| (e.name.clone(), serde_json::Value::from(e.count)))
            .collect();
        let data_json = serde_json::Value::Object(counts).to_string();
        let config_json = serde_json::json!({
            "topologyUrl": TOPOLOGY_URL,
            "objectName": TOPOLOGY_OBJECT,
            "width": 960,
            "height": 600,
        })
        .to_string();

        js_bridge::render_choropleth(MAP_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Selection channel: county clicks reported by the map JS ───
    use_future(move || async move {
        let mut channel = document::eval(
            r#"window.__fawOnCountyClick = function(name) { dioxus.send(name); };"#,
        );
        loop {
            match channel.recv::<String>().await {
                Ok(clicked) => {
                    let next =
                        selection::toggle_selection(state.selected_county.peek().as_deref(), &clicked);
                    if next.is_some() {
                        // Unseen counties get a zero-value placeholder so
                        // the detail card always has an entry to show.
                        state.dataset.write().ensure(&clicked);
                    }
                    js_bridge::set_active_county(next.as_deref());
                    state.selected_county.set(next);
                }
                Err(e) => {
                    log::error!("county click channel closed: {e:?}");
                    break;
                }
            }
        }
    });

    // ─── Render ───
    rsx! {
        NavMenu { links: site_links() }
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if (state.ready)() {
                SectionHeader {
                    title: "全國詐騙問答統計".to_string(),
                    subtitle: "各縣市問答件數與詐騙手法排行，點擊地圖查看單一縣市".to_string(),
                }

                MapContainer { id: MAP_CONTAINER_ID.to_string() }

                if let Some(name) = (state.selected_county)() {
                    CountyDetails {
                        entry: selected_entry(&state, &name),
                        on_back: move |_| {
                            js_bridge::set_active_county(None);
                            state.selected_county.set(None);
                        },
                    }
                } else if let Some(t) = tables() {
                    StatsTables { tables: t }
                }
            }
        }
    }
}

/// Entry for the detail card. The click handler already inserted a
/// placeholder, so the fallback only covers a selection set before the
/// dataset write landed.
fn selected_entry(state: &AppState, name: &str) -> CountyEntry {
    state
        .dataset
        .read()
        .get(name)
        .cloned()
        .unwrap_or_else(|| CountyEntry::zero(name))
}

/// The nationwide double table plus the top-5 methods table.
///
/// Desktop: first 11 counties in the left column, remainder right.
/// Narrow viewports: one headerless column with every county.
#[component]
fn StatsTables(tables: DashboardTables) -> Element {
    let narrow = viewport::is_narrow();
    let (left, right) = ranking::split_columns(&tables.ranking);
    let left = left.to_vec();
    let right = right.to_vec();

    rsx! {
        div {
            id: "fraud-double-table",
            style: "display: flex; gap: 16px;",
            if narrow {
                div {
                    class: "table-column",
                    CountyRankTable { rows: tables.ranking.clone(), with_header: false }
                }
            } else {
                div {
                    class: "table-column",
                    CountyRankTable { rows: left }
                }
                div {
                    class: "table-column",
                    CountyRankTable { rows: right }
                }
            }
        }
        div {
            id: "fraud-top5-table",
            style: "margin-top: 16px;",
            TopTypesTable { rows: tables.top_types.clone() }
        }
    }
}
