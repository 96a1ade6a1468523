//! Google Maps surface
//!
//! [`MapSurface`] over the JS map from `leptos-gmaps`. Widget errors are
//! logged and otherwise ignored.

use std::collections::HashMap;
use std::rc::Rc;

use leptos_gmaps::{
    AdvancedMarkerElement, LatLngBoundsLiteral, LatLngLiteral, Map, MapOptions, Padding,
    PinElement, PinOptions,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::map::controller::{MapSurface, MarkerSpec, PinStyle, DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::map::geo::Bounds;
use crate::models::Location;

struct PlacedMarker {
    marker: AdvancedMarkerElement,
    // Dropping the closure would invalidate the JS listener
    _on_click: Closure<dyn FnMut()>,
}

pub struct GoogleMap {
    map: Map,
    markers: HashMap<u32, PlacedMarker>,
    on_select: Rc<dyn Fn(u32)>,
}

fn literal(location: Location) -> LatLngLiteral {
    LatLngLiteral { lat: location.lat, lng: location.lng }
}

fn pin_options(style: PinStyle) -> PinOptions {
    PinOptions {
        background: style.background.to_string(),
        border_color: style.border.to_string(),
        glyph_color: style.glyph.to_string(),
    }
}

impl GoogleMap {
    /// Create the map inside `element`; `on_select` receives clicked pizzeria ids
    pub fn mount(
        element: &web_sys::HtmlElement,
        map_id: &str,
        on_select: impl Fn(u32) + 'static,
    ) -> Result<Self, JsValue> {
        let options = MapOptions {
            center: literal(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
            map_id: map_id.to_string(),
            gesture_handling: "greedy".to_string(),
        };
        let map = Map::new(element, &options)?;
        log::info!("Map mounted");

        Ok(Self {
            map,
            markers: HashMap::new(),
            on_select: Rc::new(on_select),
        })
    }

    fn place(&self, spec: &MarkerSpec) -> Result<PlacedMarker, JsValue> {
        let pin = PinElement::new(&pin_options(spec.style))?;
        let marker = AdvancedMarkerElement::new(&self.map, &literal(spec.position), &spec.title, &pin)?;

        let on_select = Rc::clone(&self.on_select);
        let id = spec.id;
        let on_click = Closure::<dyn FnMut()>::new(move || on_select(id));
        marker.on_click(on_click.as_ref().unchecked_ref());

        Ok(PlacedMarker { marker, _on_click: on_click })
    }
}

impl MapSurface for GoogleMap {
    fn fit_bounds(&mut self, bounds: Bounds, padding_px: f64) {
        let literal = LatLngBoundsLiteral {
            north: bounds.north,
            south: bounds.south,
            east: bounds.east,
            west: bounds.west,
        };
        if let Err(e) = self.map.fit_bounds(&literal, &Padding::uniform(padding_px)) {
            log::warn!("fitBounds failed: {:?}", e);
        }
    }

    fn pan_to(&mut self, center: Location) {
        if let Err(e) = self.map.pan_to(&literal(center)) {
            log::warn!("panTo failed: {:?}", e);
        }
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.map.set_zoom(zoom);
    }

    fn add_marker(&mut self, spec: &MarkerSpec) {
        match self.place(spec) {
            Ok(placed) => {
                if let Some(replaced) = self.markers.insert(spec.id, placed) {
                    replaced.marker.remove();
                }
            }
            Err(e) => log::warn!("Could not place marker {}: {:?}", spec.id, e),
        }
    }

    fn restyle_marker(&mut self, id: u32, style: PinStyle) {
        let Some(placed) = self.markers.get(&id) else { return };
        match PinElement::new(&pin_options(style)) {
            Ok(pin) => placed.marker.set_content(&pin.element()),
            Err(e) => log::warn!("Could not restyle marker {}: {:?}", id, e),
        }
    }

    fn clear_markers(&mut self) {
        for (_, placed) in self.markers.drain() {
            placed.marker.remove();
        }
    }
}
