//! Marker selection state: nothing selected, or exactly one pizzeria.
//! Once a pizzeria is selected there is no way back to nothing.

use crate::models::Pizzeria;

pub const NO_SELECTION_TEXT: &str = "Click a marker to select a pizzeria";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(Option<Pizzeria>);

impl Selection {
    /// Select `pizzeria`, replacing any previous pick.
    /// Returns false when it was already selected.
    pub fn select(&mut self, pizzeria: Pizzeria) -> bool {
        if self.selected_id() == Some(pizzeria.id) {
            return false;
        }
        self.0 = Some(pizzeria);
        true
    }

    pub fn selected(&self) -> Option<&Pizzeria> {
        self.0.as_ref()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.0.as_ref().map(|p| p.id)
    }

    /// Text for the line under the map
    pub fn status_line(&self) -> &str {
        self.0.as_ref().map_or(NO_SELECTION_TEXT, |p| p.name.as_str())
    }
}
