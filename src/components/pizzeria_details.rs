//! Pizzeria Details Component
//!
//! Card with the selected pizzeria's address, rating, visit date and review.

use leptos::prelude::*;

use crate::map::Selection;
use crate::markdown::{is_safe_url, render_review};
use crate::models::Pizzeria;

/// "Visited 12 March 2024"
pub fn visited_text(pizzeria: &Pizzeria) -> Option<String> {
    pizzeria
        .visited_on()
        .map(|date| format!("Visited {}", date.format("%-d %B %Y")))
}

/// Google Maps link, if the stored URL is a web address
pub fn maps_link(pizzeria: &Pizzeria) -> Option<String> {
    pizzeria
        .google_maps_url
        .as_deref()
        .map(str::trim)
        .filter(|url| is_safe_url(url))
        .map(str::to_string)
}

#[component]
pub fn PizzeriaDetails(selection: ReadSignal<Selection>) -> impl IntoView {
    move || {
        selection.with(|s| s.selected().cloned()).map(|pizzeria| {
            let rating = pizzeria.rating_label();
            let visited = visited_text(&pizzeria);
            let review = pizzeria.review.as_deref().map(render_review);
            let maps_url = maps_link(&pizzeria);

            view! {
                <article class="pizzeria-details">
                    <h2>{pizzeria.name.clone()}</h2>
                    <p class="pizzeria-address">{pizzeria.address.clone()}</p>
                    {rating.map(|r| view! { <p class="pizzeria-rating">{r}</p> })}
                    {visited.map(|v| view! { <p class="pizzeria-visited">{v}</p> })}
                    {review.map(|html| view! { <div class="pizzeria-review" inner_html=html></div> })}
                    {maps_url.map(|url| view! {
                        <a class="pizzeria-maps-link" href=url target="_blank" rel="noopener noreferrer">
                            "Open in Google Maps"
                        </a>
                    })}
                </article>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pizzeria;

    #[test]
    fn test_visited_text() {
        let mut p = pizzeria(1, "Gazzo", None);
        assert_eq!(visited_text(&p), None);

        p.visited_at = Some("2024-03-12T19:30:00".to_string());
        assert_eq!(visited_text(&p).as_deref(), Some("Visited 12 March 2024"));
    }

    #[test]
    fn test_maps_link_rejects_script_urls() {
        let mut p = pizzeria(1, "Gazzo", None);
        assert_eq!(maps_link(&p), None);

        p.google_maps_url = Some("https://maps.google.com/?cid=42".to_string());
        assert_eq!(maps_link(&p).as_deref(), Some("https://maps.google.com/?cid=42"));

        p.google_maps_url = Some("javascript:alert(document.cookie)".to_string());
        assert_eq!(maps_link(&p), None);

        p.google_maps_url = Some("data:text/html,<script>alert(1)</script>".to_string());
        assert_eq!(maps_link(&p), None);
    }
}
