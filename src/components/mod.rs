//! UI Components
//!
//! Leptos components making up the page.

mod pizza_map;
mod pizzeria_details;
mod visit_count;

pub use pizza_map::PizzaMap;
pub use pizzeria_details::PizzeriaDetails;
pub use visit_count::{visited_label, VisitCount};
