//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the route string and globe rotation in the URL query string
//! (`?routes=...&lambda=...&phi=...`) so reloading restores the view and
//! URLs can be shared.

use crate::geo::Rotation;

/// Parsed URL parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlParams {
    pub routes: Option<String>,
    pub lambda: Option<f64>,
    pub phi: Option<f64>,
}

impl UrlParams {
    /// Rotation from the URL, when both angles are present.
    pub fn rotation(&self) -> Option<Rotation> {
        Some(Rotation::new(self.lambda?, self.phi?).normalized())
    }
}

/// Parses a query string (with or without the leading `?`). Values are passed
/// through `decode`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))] // Only the browser has a URL
pub fn parse_query(search: &str, decode: impl Fn(&str) -> Option<String>) -> UrlParams {
    let mut params = UrlParams::default();

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        match key {
            "routes" => params.routes = decode(value).filter(|r| !r.trim().is_empty()),
            "lambda" => params.lambda = value.parse().ok().filter(|v: &f64| v.is_finite()),
            "phi" => {
                params.phi = value
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite())
                    .map(|v| v.clamp(-Rotation::PHI_LIMIT, Rotation::PHI_LIMIT))
            }
            _ => {}
        }
    }

    params
}

/// Builds the query string for `routes` (already URI-encoded) and `rotation`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))] // Only the browser has a URL
pub fn format_query(encoded_routes: &str, rotation: Rotation) -> String {
    let rotation = rotation.normalized();
    let angles = format!("lambda={:.2}&phi={:.2}", rotation.lambda, rotation.phi);
    if encoded_routes.is_empty() {
        format!("?{angles}")
    } else {
        format!("?routes={encoded_routes}&{angles}")
    }
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return UrlParams::default();
    };

    parse_query(&search, |value| {
        js_sys::decode_uri_component(value)
            .ok()
            .and_then(|s| s.as_string())
    })
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

/// Push current state to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(routes: &str, rotation: Rotation) {
    let encoded = js_sys::encode_uri_component(routes.trim())
        .as_string()
        .unwrap_or_default();
    let query = format_query(&encoded, rotation);

    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query))
    {
        log::warn!("Failed to update URL: {:?}", e);
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_routes: &str, _rotation: Rotation) {}
