// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot geolocation lookup used to center the map at startup.

use serde::Deserialize;

use crate::models::Coordinates;

/// Where the startup position comes from.
#[derive(Debug, Clone)]
pub enum GeolocationSource {
    /// Position supplied by configuration.
    Fixed(Coordinates),
    /// JSON endpoint returning `{ "latitude": .., "longitude": .. }`.
    Http { url: String, http: reqwest::Client },
    /// No provider configured.
    Unavailable,
}

#[derive(Deserialize)]
struct PositionResponse {
    latitude: f64,
    longitude: f64,
}

impl GeolocationSource {
    pub fn http(url: impl Into<String>) -> Self {
        GeolocationSource::Http {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Resolve the current position once. No retry.
    pub async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let coords = match self {
            GeolocationSource::Fixed(coords) => *coords,
            GeolocationSource::Unavailable => return Err(GeolocationError::Unavailable),
            GeolocationSource::Http { url, http } => {
                let response = http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| GeolocationError::Request(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(GeolocationError::Request(format!(
                        "provider returned {}",
                        response.status()
                    )));
                }

                let body: PositionResponse = response
                    .json()
                    .await
                    .map_err(|e| GeolocationError::Parse(e.to_string()))?;
                Coordinates::new(body.latitude, body.longitude)
            }
        };

        if !coords.is_valid() {
            return Err(GeolocationError::OutOfRange);
        }
        Ok(coords)
    }
}

/// Errors from the geolocation lookup.
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("No geolocation provider available")]
    Unavailable,

    #[error("Geolocation request failed: {0}")]
    Request(String),

    #[error("Failed to parse geolocation response: {0}")]
    Parse(String),

    #[error("Geolocation provider returned coordinates out of range")]
    OutOfRange,
}
