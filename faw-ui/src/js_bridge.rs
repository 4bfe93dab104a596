//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js/topojson choropleth functions live in `assets/js/*.js` and
//! are loaded at runtime. They are evaluated as globals (no ES modules)
//! and exposed via `window.*`. This module provides safe Rust wrappers
//! that serialize data and call those globals.

// Embed the map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FAW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map scripts with a wait-for-D3 polling loop.
///
/// The map JS files define functions like `renderChoroplethMap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once both D3 and
/// topojson are ready, and then explicitly promote each function to
/// `window.*`.
pub fn init_map() {
    let all_js = [TOOLTIP_JS, CHOROPLETH_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__fawMapScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__fawMapScripts);
                    delete window.__fawMapScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof setActiveCounty !== 'undefined') window.setActiveCounty = setActiveCounty;
                    if (typeof showMapTooltip !== 'undefined') window.showMapTooltip = showMapTooltip;
                    if (typeof hideMapTooltip !== 'undefined') window.hideMapTooltip = hideMapTooltip;
                    window.__fawMapReady = true;
                    console.log('FAW map scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the county choropleth.
///
/// Uses a polling loop to wait for D3.js/topojson to load, the map
/// scripts to initialize, and the container DOM element to exist before
/// rendering.
pub fn render_choropleth(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__fawMapReady &&
                    typeof window.renderChoroplethMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderChoroplethMap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[FAW] renderChoroplethMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Sync the map's active-county highlight with the selection state.
/// `None` clears the highlight and restores every county label.
pub fn set_active_county(county: Option<&str>) {
    let arg = match county {
        Some(name) => serde_json::to_string(name).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    };
    call_js(&format!(
        "if (typeof window.setActiveCounty !== 'undefined') window.setActiveCounty({arg});"
    ));
}
