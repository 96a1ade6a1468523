//! Backend API
//!
//! Read-only binding to the pizzeria listing endpoint.

use gloo_net::http::Request;
use web_sys::RequestCache;

use crate::config::AppConfig;
use crate::models::Pizzeria;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("could not decode pizzeria listing: {0}")]
    Decode(String),
}

/// Interpret a listing response
pub fn decode_pizzerias(status: u16, body: &str) -> Result<Vec<Pizzeria>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET /pizzerias, bypassing the browser cache
pub async fn fetch_pizzerias(config: &AppConfig) -> Result<Vec<Pizzeria>, ApiError> {
    let url = config.pizzerias_url();
    log::debug!("Fetching {}", url);

    let response = Request::get(&url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        return Err(ApiError::Status(status));
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_pizzerias(status, &body)
}

/// Any failure degrades to an empty listing
pub fn or_empty(result: Result<Vec<Pizzeria>, ApiError>) -> Vec<Pizzeria> {
    match result {
        Ok(pizzerias) => {
            log::info!("Loaded {} pizzerias", pizzerias.len());
            pizzerias
        }
        Err(e) => {
            log::warn!("Pizzeria listing unavailable, showing none: {}", e);
            Vec::new()
        }
    }
}

/// Load the listing once; never fails
pub async fn load_pizzerias(config: &AppConfig) -> Vec<Pizzeria> {
    or_empty(fetch_pizzerias(config).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    const BODY: &str = r#"[
        {"id": 1, "name": "Luigi's", "address": "A", "location": {"lat": 52.5, "lng": 13.4},
         "rating": 4.2, "google_maps_url": null, "review": "Good", "visited_at": null,
         "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-02T00:00:00"},
        {"id": 2, "name": "No-Loc", "address": "B", "location": null,
         "rating": null, "google_maps_url": null, "review": null, "visited_at": null,
         "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"}
    ]"#;

    #[test]
    fn test_success_keeps_every_record() {
        let pizzerias = decode_pizzerias(200, BODY).expect("valid body");
        let expected: Vec<Pizzeria> = serde_json::from_str(BODY).unwrap();

        assert_eq!(pizzerias.len(), 2);
        assert_eq!(pizzerias, expected);
        assert_eq!(pizzerias[0].location, Some(Location { lat: 52.5, lng: 13.4 }));
        assert_eq!(pizzerias[1].name, "No-Loc");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(decode_pizzerias(200, "[]"), Ok(Vec::new()));
    }

    #[test]
    fn test_non_success_status() {
        for status in [301, 400, 404, 500, 503] {
            assert_eq!(decode_pizzerias(status, BODY), Err(ApiError::Status(status)));
            assert!(or_empty(decode_pizzerias(status, BODY)).is_empty());
        }
    }

    #[test]
    fn test_undecodable_body() {
        let result = decode_pizzerias(200, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
        assert!(or_empty(result).is_empty());
    }

    #[test]
    fn test_unreachable_degrades_to_empty() {
        let result = Err(ApiError::Network("connection refused".to_string()));
        assert!(or_empty(result).is_empty());
    }
}
