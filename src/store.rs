//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Pizzeria;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every loaded pizzeria, located or not
    pub pizzerias: Vec<Pizzeria>,
    /// Incremented on each load; identifies the current catalog
    pub revision: u32,
    /// Set once the first load settled (successfully or not)
    pub loaded: bool,
}

impl AppState {
    /// Replace the catalog with a freshly loaded one
    pub fn load(&mut self, pizzerias: Vec<Pizzeria>) {
        self.pizzerias = pizzerias;
        self.revision = self.revision.wrapping_add(1);
        self.loaded = true;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Store a loaded catalog
pub fn store_set_catalog(store: &AppStore, pizzerias: Vec<Pizzeria>) {
    store.update(|state| state.load(pizzerias));
}
