//! Pizza Map Component
//!
//! Google map with one marker per located pizzeria and a status line
//! naming the selected one.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_gmaps::{use_maps_api, MapsApiState};

use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::map::{GoogleMap, MapController, Selection};
use crate::models::Pizzeria;

pub const MISSING_KEY_TEXT: &str = "Google Maps API key not configured";

/// What the map section renders for a given configuration
#[derive(Clone, Debug, PartialEq)]
pub enum MapMode {
    /// No key: placeholder text, the Maps script is never requested
    Placeholder,
    Interactive { api_key: String, map_id: String },
}

impl MapMode {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.maps_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => MapMode::Interactive {
                api_key: key.to_string(),
                map_id: config.map_id.clone(),
            },
            _ => MapMode::Placeholder,
        }
    }
}

/// Map section: placeholder when no Maps key is configured
#[component]
pub fn PizzaMap(
    #[prop(into)] pizzerias: Signal<Vec<Pizzeria>>,
    #[prop(into)] revision: Signal<u32>,
    selection: ReadSignal<Selection>,
    set_selection: WriteSignal<Selection>,
) -> impl IntoView {
    let mode = use_app_context().config.with_value(MapMode::from_config);

    match mode {
        MapMode::Placeholder => view! {
            <div class="map-placeholder">
                <p>{MISSING_KEY_TEXT}</p>
            </div>
        }
        .into_any(),
        MapMode::Interactive { api_key, map_id } => view! {
            <div class="pizza-map">
                <MapCanvas
                    api_key=api_key
                    map_id=map_id
                    pizzerias=pizzerias
                    revision=revision
                    selection=selection
                    set_selection=set_selection
                />
                <StatusLine selection=selection />
            </div>
        }
        .into_any(),
    }
}

/// The map widget itself
#[component]
fn MapCanvas(
    api_key: String,
    map_id: String,
    pizzerias: Signal<Vec<Pizzeria>>,
    revision: Signal<u32>,
    selection: ReadSignal<Selection>,
    set_selection: WriteSignal<Selection>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let api_state = use_maps_api(api_key);
    let (mounted, set_mounted) = signal(false);
    let controller: Rc<RefCell<Option<MapController<GoogleMap>>>> = Rc::default();

    // Create the map once the script and the container are both there
    {
        let controller = Rc::clone(&controller);
        Effect::new(move |_| {
            if api_state.get() != MapsApiState::Ready {
                return;
            }
            let Some(element) = container.get() else { return };
            if controller.borrow().is_some() {
                return;
            }

            let on_select = move |id: u32| {
                let picked = pizzerias.with_untracked(|all| all.iter().find(|p| p.id == id).cloned());
                if let Some(pizzeria) = picked {
                    set_selection.maybe_update(|current| current.select(pizzeria));
                }
            };
            match GoogleMap::mount(&element, &map_id, on_select) {
                Ok(map) => {
                    *controller.borrow_mut() = Some(MapController::new(map));
                    set_mounted.set(true);
                }
                Err(e) => log::warn!("Could not create map: {:?}", e),
            }
        });
    }

    // Markers and bounds follow the catalog
    {
        let controller = Rc::clone(&controller);
        Effect::new(move |_| {
            let revision = revision.get();
            if !mounted.get() {
                return;
            }
            pizzerias.with(|all| {
                if let Some(map) = controller.borrow_mut().as_mut() {
                    map.show_catalog(revision, all);
                }
            });
        });
    }

    // Highlight and zoom follow the selection
    Effect::new(move |_| {
        let selected = selection.with(Selection::selected_id);
        if !mounted.get() {
            return;
        }
        if let Some(map) = controller.borrow_mut().as_mut() {
            map.focus(selected);
        }
    });

    view! { <div class="map-canvas" node_ref=container></div> }
}

#[component]
fn StatusLine(selection: ReadSignal<Selection>) -> impl IntoView {
    let status_class = move || {
        if selection.with(|s| s.selected().is_some()) {
            "map-status selected"
        } else {
            "map-status"
        }
    };

    view! {
        <div class=status_class>
            <p>{move || selection.with(|s| s.status_line().to_string())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&'static str>) -> AppConfig {
        AppConfig::resolve(|name| match name {
            "GOOGLE_MAPS_API_KEY" => key,
            _ => None,
        })
    }

    #[test]
    fn test_missing_key_shows_placeholder() {
        assert_eq!(MapMode::from_config(&config_with_key(None)), MapMode::Placeholder);
        assert_eq!(MISSING_KEY_TEXT, "Google Maps API key not configured");
    }

    #[test]
    fn test_blank_key_shows_placeholder() {
        assert_eq!(MapMode::from_config(&config_with_key(Some("   "))), MapMode::Placeholder);

        // A hand-built config with a blank key must not reach the script loader either
        let mut config = config_with_key(None);
        config.maps_api_key = Some(" ".to_string());
        assert_eq!(MapMode::from_config(&config), MapMode::Placeholder);
    }

    #[test]
    fn test_key_enables_map() {
        let config = config_with_key(Some("abc123"));
        assert_eq!(
            MapMode::from_config(&config),
            MapMode::Interactive {
                api_key: "abc123".to_string(),
                map_id: config.map_id.clone(),
            }
        );
    }
}
