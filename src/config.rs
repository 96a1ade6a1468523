//! Application Configuration
//!
//! Resolved once at startup from compile-time environment (a WASM bundle
//! has no process environment) and handed to the app through context.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_MAP_ID: &str = "pizza-map";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base address, without trailing slash
    pub api_base_url: String,
    /// Google Maps credential; absent means the map is not shown
    pub maps_api_key: Option<String>,
    pub map_id: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            maps_api_key: None,
            map_id: DEFAULT_MAP_ID.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Load from variables baked in at build time (see build.rs)
    pub fn from_env() -> Self {
        Self::resolve(|key| match key {
            "PIZZA_API_URL" => option_env!("PIZZA_API_URL"),
            "GOOGLE_MAPS_API_KEY" => option_env!("GOOGLE_MAPS_API_KEY"),
            "GOOGLE_MAPS_MAP_ID" => option_env!("GOOGLE_MAPS_MAP_ID"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            _ => None,
        })
    }

    /// Resolve from any key lookup, falling back to defaults.
    /// Blank values count as unset.
    pub fn resolve<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_base_url: get("PIZZA_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            maps_api_key: get("GOOGLE_MAPS_API_KEY").map(str::to_string),
            map_id: get("GOOGLE_MAPS_MAP_ID")
                .map(str::to_string)
                .unwrap_or(defaults.map_id),
            log_level: get("LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Full URL of the pizzeria listing
    pub fn pizzerias_url(&self) -> String {
        format!("{}/pizzerias", self.api_base_url)
    }
}
