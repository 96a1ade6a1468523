//! Map View Logic
//!
//! Selection state, viewport effects and the Google Maps surface.

pub mod controller;
pub mod effect_gate;
pub mod geo;
pub mod google;
pub mod selection;

mod tests;

pub use controller::{MapController, MapSurface, MarkerSpec, PinStyle};
pub use google::GoogleMap;
pub use selection::{Selection, NO_SELECTION_TEXT};
