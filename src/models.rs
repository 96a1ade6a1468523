//! Frontend Models
//!
//! Data structures matching the backend's pizzeria listing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Pizzeria data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizzeria {
    pub id: u32,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub google_maps_url: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub visited_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Pizzeria {
    /// Calendar date of the visit, if recorded and readable
    pub fn visited_on(&self) -> Option<NaiveDate> {
        let raw = self.visited_at.as_deref()?.trim();
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.date_naive());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| format!("{:.1} / 5", r))
    }
}

/// Minimal record for tests
#[cfg(test)]
pub(crate) fn pizzeria(id: u32, name: &str, location: Option<(f64, f64)>) -> Pizzeria {
    Pizzeria {
        id,
        name: name.to_string(),
        address: format!("{} Street, Berlin", name),
        location: location.map(|(lat, lng)| Location { lat, lng }),
        rating: None,
        google_maps_url: None,
        review: None,
        visited_at: None,
        created_at: "2024-01-01T00:00:00".to_string(),
        updated_at: "2024-01-01T00:00:00".to_string(),
    }
}
