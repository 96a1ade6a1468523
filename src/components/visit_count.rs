//! Visit Count Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// "N pizzerias visited", counting every loaded record
pub fn visited_label(count: usize) -> String {
    format!("{} pizzerias visited", count)
}

#[component]
pub fn VisitCount() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="visit-count">{move || visited_label(store.pizzerias().read().len())}</p>
    }
}
