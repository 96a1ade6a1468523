//! Leptos Google Maps Utilities
//!
//! Thin bindings to the Google Maps JavaScript API (map, advanced markers,
//! pins), a once-per-page script loader and a Leptos signal tracking it.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Bootstrap URL of the Maps JavaScript API
pub const MAPS_SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";

/// DOM event fired by a clickable advanced marker
pub const MARKER_CLICK_EVENT: &str = "gmp-click";

// ========================
// Bindings
// ========================

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    pub type Map;

    #[wasm_bindgen(constructor)]
    fn new_raw(element: &web_sys::HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds_raw(this: &Map, bounds: &JsValue, padding: &JsValue);

    #[wasm_bindgen(method, js_name = panTo)]
    fn pan_to_raw(this: &Map, position: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "marker"])]
extern "C" {
    pub type AdvancedMarkerElement;

    #[wasm_bindgen(constructor)]
    fn new_raw(options: &JsValue) -> AdvancedMarkerElement;

    #[wasm_bindgen(method, setter = map)]
    fn set_map_raw(this: &AdvancedMarkerElement, map: &JsValue);

    #[wasm_bindgen(method, setter = content)]
    pub fn set_content(this: &AdvancedMarkerElement, content: &web_sys::Element);

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &AdvancedMarkerElement, event: &str, handler: &js_sys::Function);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "marker"])]
extern "C" {
    pub type PinElement;

    #[wasm_bindgen(constructor)]
    fn new_raw(options: &JsValue) -> PinElement;

    #[wasm_bindgen(method, getter)]
    pub fn element(this: &PinElement) -> web_sys::Element;
}

// ========================
// Option literals
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLngLiteral {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLngBoundsLiteral {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Pixel margin around fitted bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(px: f64) -> Self {
        Self { top: px, right: px, bottom: px, left: px }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLngLiteral,
    pub zoom: f64,
    pub map_id: String,
    pub gesture_handling: String,
}

/// Plain-data part of the marker options; map and content are set separately
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub position: LatLngLiteral,
    pub title: String,
    /// Required for `gmp-click` to fire
    pub gmp_clickable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinOptions {
    pub background: String,
    pub border_color: String,
    pub glyph_color: String,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

impl Map {
    pub fn new(element: &web_sys::HtmlElement, options: &MapOptions) -> Result<Map, JsValue> {
        Ok(Map::new_raw(element, &to_js(options)?))
    }

    pub fn fit_bounds(&self, bounds: &LatLngBoundsLiteral, padding: &Padding) -> Result<(), JsValue> {
        self.fit_bounds_raw(&to_js(bounds)?, &to_js(padding)?);
        Ok(())
    }

    pub fn pan_to(&self, position: &LatLngLiteral) -> Result<(), JsValue> {
        self.pan_to_raw(&to_js(position)?);
        Ok(())
    }
}

impl PinElement {
    pub fn new(options: &PinOptions) -> Result<PinElement, JsValue> {
        Ok(PinElement::new_raw(&to_js(options)?))
    }
}

impl AdvancedMarkerElement {
    /// Create a clickable marker attached to `map`
    pub fn new(
        map: &Map,
        position: &LatLngLiteral,
        title: &str,
        pin: &PinElement,
    ) -> Result<AdvancedMarkerElement, JsValue> {
        let options = to_js(&MarkerOptions {
            position: *position,
            title: title.to_string(),
            gmp_clickable: true,
        })?;
        js_sys::Reflect::set(&options, &"map".into(), map)?;
        js_sys::Reflect::set(&options, &"content".into(), &pin.element())?;
        Ok(AdvancedMarkerElement::new_raw(&options))
    }

    /// Call `handler` whenever the marker is clicked
    pub fn on_click(&self, handler: &js_sys::Function) {
        self.add_event_listener(MARKER_CLICK_EVENT, handler);
    }

    /// Detach the marker from its map
    pub fn remove(&self) {
        self.set_map_raw(&JsValue::NULL);
    }
}

// ========================
// Script loading
// ========================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapsLoadError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("failed to inject maps script: {0}")]
    Inject(String),
    #[error("maps script failed to load")]
    ScriptFailed,
}

/// Load state of the Maps JavaScript API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapsApiState {
    Loading,
    Ready,
    Failed,
}

thread_local! {
    // Shared by every caller so the script tag is injected once per page
    static PENDING_LOAD: RefCell<Option<js_sys::Promise>> = RefCell::new(None);
}

/// Script URL for the given API key, with the marker library enabled
pub fn script_url(api_key: &str) -> String {
    format!(
        "{}?key={}&v=weekly&libraries=marker",
        MAPS_SCRIPT_BASE,
        utf8_percent_encode(api_key, NON_ALPHANUMERIC)
    )
}

fn marker_library_present() -> bool {
    let Some(window) = web_sys::window() else { return false };
    ["google", "maps", "marker"]
        .iter()
        .try_fold(JsValue::from(window), |obj, key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

fn inject_script(api_key: &str) -> Result<js_sys::Promise, MapsLoadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MapsLoadError::NoDocument)?;
    let head = document.head().ok_or(MapsLoadError::NoDocument)?;

    let script = document
        .create_element("script")
        .map_err(|e| MapsLoadError::Inject(format!("{:?}", e)))?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| MapsLoadError::Inject("not a script element".to_string()))?;
    script.set_src(&script_url(api_key));
    script.set_async(true);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)
        .map_err(|e| MapsLoadError::Inject(format!("{:?}", e)))?;
    log::info!("Requesting Google Maps script");
    Ok(promise)
}

/// Load the Maps JavaScript API once per page
pub async fn load_maps_api(api_key: &str) -> Result<(), MapsLoadError> {
    if marker_library_present() {
        return Ok(());
    }

    let promise = PENDING_LOAD.with(|pending| -> Result<js_sys::Promise, MapsLoadError> {
        let mut pending = pending.borrow_mut();
        if let Some(existing) = pending.as_ref() {
            return Ok(existing.clone());
        }
        let created = inject_script(api_key)?;
        *pending = Some(created.clone());
        Ok(created)
    })?;

    if JsFuture::from(promise).await.is_err() {
        // Allow a later attempt to inject a fresh tag
        PENDING_LOAD.with(|pending| pending.borrow_mut().take());
        return Err(MapsLoadError::ScriptFailed);
    }
    Ok(())
}

/// Start loading the Maps API and expose its state as a signal
pub fn use_maps_api(api_key: String) -> ReadSignal<MapsApiState> {
    let (state, set_state) = signal(MapsApiState::Loading);
    spawn_local(async move {
        match load_maps_api(&api_key).await {
            Ok(()) => set_state.set(MapsApiState::Ready),
            Err(e) => {
                log::warn!("Google Maps unavailable: {}", e);
                set_state.set(MapsApiState::Failed);
            }
        }
    });
    state
}
