//! JSON client for the backend endpoints, built on the page's `fetch`.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use faw_stats::payload::{AskRequest, AskResponse, FraudStatsPayload, LocationPing};

/// Statistics endpoint, fetched once per dashboard page load.
pub const FRAUD_STATS_URL: &str = "/api/fraud-stats";
/// Q&A endpoint behind the chat widget.
pub const ASK_URL: &str = "/api/ask";
/// Page-load location telemetry endpoint.
pub const LOCATION_URL: &str = "/location";

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{context}: {value:?}")
}

async fn run_fetch(request: Request) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch did not yield a Response"))?;
    let text = JsFuture::from(response.text().map_err(|e| js_error("body read failed", e))?)
        .await
        .map_err(|e| js_error("body read failed", e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body was not text"))
}

async fn get_text(url: &str) -> Result<String> {
    let request = Request::new_with_str(url).map_err(|e| js_error("bad request", e))?;
    run_fetch(request).await
}

async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<String> {
    let body = serde_json::to_string(payload)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|e| js_error("bad request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("bad header", e))?;
    run_fetch(request).await
}

/// Fetch and decode the statistics payload.
///
/// A non-JSON body is an error, never an empty result: the caller keeps
/// the dataset unpublished so renderers can tell "failed" from "empty".
pub async fn fetch_fraud_stats() -> Result<FraudStatsPayload> {
    let body = get_text(FRAUD_STATS_URL).await?;
    serde_json::from_str(&body).context("fraud-stats body was not valid JSON")
}

/// Send a chat question, with or without coordinates attached.
pub async fn ask_question(request: &AskRequest) -> Result<AskResponse> {
    let body = post_json(ASK_URL, request).await?;
    serde_json::from_str(&body).context("ask body was not valid JSON")
}

/// Fire-and-forget page-load location telemetry. The response is
/// ignored; failure is logged and nothing else happens.
pub fn report_location(latitude: f64, longitude: f64) {
    wasm_bindgen_futures::spawn_local(async move {
        let ping = LocationPing {
            latitude,
            longitude,
        };
        if let Err(e) = post_json(LOCATION_URL, &ping).await {
            log::warn!("location report failed: {e}");
        }
    });
}
