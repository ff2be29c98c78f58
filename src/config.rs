// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

use crate::models::Coordinates;
use crate::services::factory::ElevationPolicy;
use crate::services::geolocation::GeolocationSource;

const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,

    // --- Map ---
    /// Zoom level for the initial view and for re-centering
    pub map_zoom: u8,
    /// Tile URL template handed to the map surface
    pub tile_url: String,
    /// Fixed startup position ("lat,lng")
    pub position: Option<Coordinates>,
    /// HTTP geolocation endpoint, used when no fixed position is set
    pub geolocation_url: Option<String>,

    // --- Form ---
    /// Delay before the hidden form's layout is restored
    pub form_hide_delay_ms: u64,
    /// Sign rule for cycling elevation gain
    pub elevation_policy: ElevationPolicy,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            map_zoom: 13,
            tile_url: DEFAULT_TILE_URL.to_string(),
            position: None,
            geolocation_url: None,
            form_hide_delay_ms: 1000,
            elevation_policy: ElevationPolicy::NonNegative,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            port: parse_var("PORT", defaults.port)?,
            map_zoom: parse_var("MAPTY_MAP_ZOOM", defaults.map_zoom)?,
            tile_url: env::var("MAPTY_TILE_URL").unwrap_or(defaults.tile_url),
            position: env::var("MAPTY_POSITION")
                .ok()
                .map(|raw| parse_position(&raw))
                .transpose()?,
            geolocation_url: env::var("MAPTY_GEOLOCATION_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            form_hide_delay_ms: parse_var("MAPTY_FORM_HIDE_DELAY_MS", defaults.form_hide_delay_ms)?,
            elevation_policy: parse_var("MAPTY_ELEVATION_POLICY", defaults.elevation_policy)?,
        })
    }

    /// Geolocation source implied by this configuration.
    ///
    /// A fixed position wins over an HTTP provider.
    pub fn geolocation_source(&self) -> GeolocationSource {
        match (self.position, &self.geolocation_url) {
            (Some(coords), _) => GeolocationSource::Fixed(coords),
            (None, Some(url)) => GeolocationSource::http(url.clone()),
            (None, None) => GeolocationSource::Unavailable,
        }
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid(name, e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Parse "lat,lng".
fn parse_position(raw: &str) -> Result<Coordinates, ConfigError> {
    let invalid = || {
        ConfigError::Invalid(
            "MAPTY_POSITION",
            format!("expected 'lat,lng', got '{}'", raw),
        )
    };

    let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

    let coords = Coordinates::new(lat, lng);
    if !coords.is_valid() {
        return Err(invalid());
    }
    Ok(coords)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
