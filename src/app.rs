//! Pizza Map App
//!
//! Page layout: map across the top quarter, then title, visit count and the
//! selected pizzeria's details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{PizzaMap, PizzeriaDetails, VisitCount};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::map::Selection;
use crate::store::{store_set_catalog, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (selection, set_selection) = signal(Selection::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config.clone()));

    // Load the listing once per page
    spawn_local(async move {
        let pizzerias = api::load_pizzerias(&config).await;
        store_set_catalog(&store, pizzerias);
    });

    let pizzerias = Signal::derive(move || store.pizzerias().get());
    let revision = Signal::derive(move || store.revision().get());

    view! {
        <div class="app-layout">
            <Show when=move || store.loaded().get()>
                <section class="map-section">
                    <PizzaMap
                        pizzerias=pizzerias
                        revision=revision
                        selection=selection
                        set_selection=set_selection
                    />
                </section>

                <main class="main-content">
                    <h1>"Pizza Blog Berlin"</h1>
                    <VisitCount />
                    <PizzeriaDetails selection=selection />
                </main>
            </Show>
        </div>
    }
}
