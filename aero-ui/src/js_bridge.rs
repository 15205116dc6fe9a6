//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map helpers live in `assets/js/aqi-map.js`, evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals; marker
//! clicks come back through a `Closure` registered on `window`.

use aero_aqi::city::CityRecord;
use wasm_bindgen::prelude::*;

// Embed the map JS at compile time
static AQI_MAP_JS: &str = include_str!("../assets/js/aqi-map.js");

/// DOM id of the map container div rendered by `MapPanel`.
pub const MAP_CONTAINER_ID: &str = "aqi-map";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AeroSense JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map script with a wait-for-Leaflet polling loop.
///
/// The map JS defines functions via `function` declarations. To ensure they
/// become globally accessible (not block-scoped inside the setInterval
/// callback), we evaluate them at global scope via indirect eval once
/// Leaflet is ready, then explicitly promote each function to `window.*`.
pub fn init_map() {
    let store_js = format!(
        "window.__aeroMapScript = {};",
        serde_json::to_string(AQI_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__aeroMapScript);
                    delete window.__aeroMapScript;
                    if (typeof initAqiMap !== 'undefined') window.initAqiMap = initAqiMap;
                    if (typeof renderAqiMarkers !== 'undefined') window.renderAqiMarkers = renderAqiMarkers;
                    if (typeof destroyAqiMap !== 'undefined') window.destroyAqiMap = destroyAqiMap;
                    window.__aeroMapReady = true;
                    console.log('AeroSense map initialized');
                }
            }, 50);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render (or re-render) the city markers, highlighting the selected city.
pub fn render_markers(container_id: &str, cities: &[CityRecord], selected: &str) {
    let cities_json = serde_json::to_string(cities).unwrap_or_else(|_| "[]".to_string());
    let id_json = serde_json::to_string(container_id).unwrap_or_default();
    let selected_json = serde_json::to_string(selected).unwrap_or_default();
    call_js(&format!(
        "if (window.renderAqiMarkers) window.renderAqiMarkers({}, {}, {});",
        id_json, cities_json, selected_json
    ));
}

/// Remove the map and its markers.
pub fn destroy_map() {
    call_js("if (window.destroyAqiMap) window.destroyAqiMap();");
}

/// Register the marker-click callback. The JS side invokes
/// `window.__aeroOnMarkerClick(cityName)`; the closure is leaked
/// intentionally since it lives for the whole session.
pub fn register_marker_click(mut on_select: impl FnMut(String) + 'static) {
    let closure = Closure::wrap(Box::new(move |name: JsValue| {
        if let Some(name) = name.as_string() {
            on_select(name);
        }
    }) as Box<dyn FnMut(JsValue)>);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            window.as_ref(),
            &JsValue::from_str("__aeroOnMarkerClick"),
            closure.as_ref(),
        );
    }
    closure.forget();
}
