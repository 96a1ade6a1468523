//! Map Controller
//!
//! Keeps the map widget in step with the loaded catalog and the current
//! selection. The widget itself sits behind [`MapSurface`].

use crate::map::effect_gate::EffectGate;
use crate::map::geo::Bounds;
use crate::models::{Location, Pizzeria};

/// Berlin city center
pub const DEFAULT_CENTER: Location = Location { lat: 52.52, lng: 13.405 };
pub const DEFAULT_ZOOM: f64 = 12.0;
/// Zoom level after selecting a marker
pub const SELECTED_ZOOM: f64 = 15.0;
/// Margin around fitted bounds, in pixels
pub const FIT_PADDING_PX: f64 = 20.0;

/// Pin colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub glyph: &'static str,
}

pub const SELECTED_PIN: PinStyle = PinStyle {
    background: "#3b82f6",
    border: "#1d4ed8",
    glyph: "#1d4ed8",
};

pub const UNSELECTED_PIN: PinStyle = PinStyle {
    background: "#ef4444",
    border: "#b91c1c",
    glyph: "#b91c1c",
};

pub fn pin_style(selected: bool) -> PinStyle {
    if selected {
        SELECTED_PIN
    } else {
        UNSELECTED_PIN
    }
}

/// One marker to place on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: u32,
    pub position: Location,
    pub title: String,
    pub style: PinStyle,
}

/// Operations the controller needs from a map widget
pub trait MapSurface {
    fn fit_bounds(&mut self, bounds: Bounds, padding_px: f64);
    fn pan_to(&mut self, center: Location);
    fn set_zoom(&mut self, zoom: f64);
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn restyle_marker(&mut self, id: u32, style: PinStyle);
    fn clear_markers(&mut self);
}

pub struct MapController<S: MapSurface> {
    surface: S,
    markers: Vec<MarkerSpec>,
    selected: Option<u32>,
    catalog_gate: EffectGate<u32>,
    selection_gate: EffectGate<Option<u32>>,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: Vec::new(),
            selected: None,
            catalog_gate: EffectGate::new(),
            selection_gate: EffectGate::new(),
        }
    }

    /// Place markers for a newly loaded catalog and fit the viewport to them.
    /// Does nothing if `revision` was already shown.
    pub fn show_catalog(&mut self, revision: u32, pizzerias: &[Pizzeria]) {
        if !self.catalog_gate.changed(&revision) {
            return;
        }

        self.surface.clear_markers();
        let selected = self.selected;
        self.markers = pizzerias
            .iter()
            .filter_map(|p| {
                Some(MarkerSpec {
                    id: p.id,
                    position: p.location?,
                    title: p.name.clone(),
                    style: pin_style(selected == Some(p.id)),
                })
            })
            .collect();
        for marker in &self.markers {
            self.surface.add_marker(marker);
        }
        log::debug!(
            "Catalog revision {}: {} markers for {} pizzerias",
            revision,
            self.markers.len(),
            pizzerias.len()
        );

        if let Some(bounds) = Bounds::enclosing(self.markers.iter().map(|m| m.position)) {
            self.surface.fit_bounds(bounds, FIT_PADDING_PX);
        }
    }

    /// Highlight the selected marker and zoom in on it.
    /// Does nothing if the selection did not change.
    pub fn focus(&mut self, selected: Option<u32>) {
        if !self.selection_gate.changed(&selected) {
            return;
        }

        let previous = std::mem::replace(&mut self.selected, selected);
        if let Some(id) = previous {
            self.set_style(id, UNSELECTED_PIN);
        }

        let Some(id) = selected else { return };
        self.set_style(id, SELECTED_PIN);
        if let Some(position) = self.markers.iter().find(|m| m.id == id).map(|m| m.position) {
            log::debug!("Centering on pizzeria {}", id);
            self.surface.pan_to(position);
            self.surface.set_zoom(SELECTED_ZOOM);
        }
    }

    fn set_style(&mut self, id: u32, style: PinStyle) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) {
            marker.style = style;
            self.surface.restyle_marker(id, style);
        }
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
