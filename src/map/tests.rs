//! Map View Tests
//!
//! Drives the controller and selection the way the PizzaMap component does,
//! against a recording surface.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::api::{decode_pizzerias, or_empty, ApiError};
    use crate::components::visited_label;
    use crate::map::controller::{
        MapController, MapSurface, MarkerSpec, PinStyle, FIT_PADDING_PX, SELECTED_PIN,
        SELECTED_ZOOM, UNSELECTED_PIN,
    };
    use crate::map::geo::Bounds;
    use crate::map::selection::{Selection, NO_SELECTION_TEXT};
    use crate::models::{pizzeria, Location, Pizzeria};

    #[derive(Default)]
    struct RecordingSurface {
        center: Option<Location>,
        zoom: Option<f64>,
        markers: BTreeMap<u32, MarkerSpec>,
        fits: Vec<(Bounds, f64)>,
        pans: usize,
    }

    impl MapSurface for RecordingSurface {
        fn fit_bounds(&mut self, bounds: Bounds, padding_px: f64) {
            self.center = Some(bounds.center());
            self.fits.push((bounds, padding_px));
        }

        fn pan_to(&mut self, center: Location) {
            self.center = Some(center);
            self.pans += 1;
        }

        fn set_zoom(&mut self, zoom: f64) {
            self.zoom = Some(zoom);
        }

        fn add_marker(&mut self, marker: &MarkerSpec) {
            self.markers.insert(marker.id, marker.clone());
        }

        fn restyle_marker(&mut self, id: u32, style: PinStyle) {
            if let Some(marker) = self.markers.get_mut(&id) {
                marker.style = style;
            }
        }

        fn clear_markers(&mut self) {
            self.markers.clear();
        }
    }

    /// Loaded page: catalog, selection and map
    struct Page {
        pizzerias: Vec<Pizzeria>,
        selection: Selection,
        map: MapController<RecordingSurface>,
    }

    impl Page {
        fn load(pizzerias: Vec<Pizzeria>) -> Self {
            let mut map = MapController::new(RecordingSurface::default());
            map.show_catalog(1, &pizzerias);
            map.focus(None);
            Self { pizzerias, selection: Selection::default(), map }
        }

        fn click(&mut self, id: u32) {
            if let Some(p) = self.pizzerias.iter().find(|p| p.id == id).cloned() {
                self.selection.select(p);
            }
            self.map.focus(self.selection.selected_id());
        }

        fn surface(&self) -> &RecordingSurface {
            self.map.surface()
        }

        fn style_of(&self, id: u32) -> PinStyle {
            self.surface().markers[&id].style
        }
    }

    fn luigi_and_no_loc() -> Vec<Pizzeria> {
        let body = r#"[
            {"id": 1, "name": "Luigi's", "address": "A", "location": {"lat": 52.5, "lng": 13.4},
             "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"},
            {"id": 2, "name": "No-Loc", "address": "B", "location": null,
             "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"}
        ]"#;
        or_empty(decode_pizzerias(200, body))
    }

    #[test]
    fn test_unlocated_records_have_no_marker_but_count() {
        let page = Page::load(luigi_and_no_loc());

        assert_eq!(page.surface().markers.len(), 1);
        assert!(page.surface().markers.contains_key(&1));
        assert_eq!(page.selection.status_line(), NO_SELECTION_TEXT);
        assert_eq!(visited_label(page.pizzerias.len()), "2 pizzerias visited");
    }

    #[test]
    fn test_initial_fit_covers_located_records() {
        let pizzerias = vec![
            pizzeria(1, "Gazzo", Some((52.48, 13.42))),
            pizzeria(2, "Standard", Some((52.54, 13.41))),
            pizzeria(3, "Unknown", None),
            pizzeria(4, "Zola", Some((52.49, 13.44))),
        ];
        let page = Page::load(pizzerias);
        let surface = page.surface();

        assert_eq!(surface.markers.len(), 3);
        assert_eq!(surface.fits.len(), 1);
        let (bounds, padding) = surface.fits[0];
        assert_eq!(padding, FIT_PADDING_PX);
        assert_eq!(bounds, Bounds { south: 52.48, west: 13.41, north: 52.54, east: 13.44 });
        assert!(surface.markers.values().all(|m| m.style == UNSELECTED_PIN));
        assert_eq!(surface.zoom, None);
    }

    #[test]
    fn test_click_selects_and_recenters() {
        let mut page = Page::load(luigi_and_no_loc());
        page.click(1);

        assert_eq!(page.selection.status_line(), "Luigi's");
        assert_eq!(page.style_of(1), SELECTED_PIN);
        assert_eq!(page.surface().center, Some(Location { lat: 52.5, lng: 13.4 }));
        assert_eq!(page.surface().zoom, Some(SELECTED_ZOOM));
    }

    #[test]
    fn test_reclick_changes_nothing() {
        let mut page = Page::load(luigi_and_no_loc());
        page.click(1);
        let pans = page.surface().pans;

        page.click(1);

        assert_eq!(page.surface().pans, pans);
        assert_eq!(page.selection.status_line(), "Luigi's");
        assert_eq!(page.style_of(1), SELECTED_PIN);
    }

    #[test]
    fn test_switching_selection_restyles_previous() {
        let mut page = Page::load(vec![
            pizzeria(1, "Gazzo", Some((52.48, 13.42))),
            pizzeria(2, "Standard", Some((52.54, 13.41))),
        ]);
        page.click(1);
        page.click(2);

        assert_eq!(page.style_of(1), UNSELECTED_PIN);
        assert_eq!(page.style_of(2), SELECTED_PIN);
        assert_eq!(page.selection.status_line(), "Standard");
        assert_eq!(page.surface().center, Some(Location { lat: 52.54, lng: 13.41 }));
        assert_eq!(page.surface().pans, 2);
    }

    #[test]
    fn test_fit_runs_once_per_revision() {
        let pizzerias = luigi_and_no_loc();
        let mut map = MapController::new(RecordingSurface::default());

        map.show_catalog(1, &pizzerias);
        map.show_catalog(1, &pizzerias);
        assert_eq!(map.surface().fits.len(), 1);

        // Selecting must not refit
        map.focus(Some(1));
        map.show_catalog(1, &pizzerias);
        assert_eq!(map.surface().fits.len(), 1);

        map.show_catalog(2, &pizzerias);
        assert_eq!(map.surface().fits.len(), 2);
        assert_eq!(map.markers().len(), 1);
        // Reload keeps the current highlight
        assert_eq!(map.surface().markers[&1].style, SELECTED_PIN);
    }

    #[test]
    fn test_unreachable_api_shows_nothing() {
        let pizzerias = or_empty(Err(ApiError::Network("connection refused".to_string())));
        let page = Page::load(pizzerias);

        assert!(page.surface().markers.is_empty());
        assert!(page.surface().fits.is_empty());
        assert_eq!(page.surface().center, None);
        assert_eq!(visited_label(page.pizzerias.len()), "0 pizzerias visited");
    }

    #[test]
    fn test_only_unlocated_records_skip_fit() {
        let page = Page::load(vec![pizzeria(1, "Nowhere", None), pizzeria(2, "Elsewhere", None)]);
        assert!(page.surface().markers.is_empty());
        assert!(page.surface().fits.is_empty());
        assert_eq!(visited_label(page.pizzerias.len()), "2 pizzerias visited");
    }

    #[test]
    fn test_focus_without_marker_does_not_pan() {
        let mut map = MapController::new(RecordingSurface::default());
        map.show_catalog(1, &[pizzeria(1, "Nowhere", None)]);
        map.focus(Some(1));

        assert_eq!(map.surface().pans, 0);
        assert_eq!(map.surface().zoom, None);
    }
}
