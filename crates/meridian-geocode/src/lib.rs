// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Nominatim geocoding client.
//!
//! Resolves a free-text place query to its single best match via the public
//! Nominatim search API. One shot, no retries; every failure mode maps to a
//! distinct [`GeocodeError`] kind so callers never have to parse message
//! text.

use std::time::Duration;

use meridian_core::{Coordinate, GeocodeError, Geocoder};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const RESOLVE_TIMEOUT: Duration = Duration::from_secs(20);

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// Synchronous [`Geocoder`] backed by a Nominatim instance.
pub struct NominatimClient {
    agent: ureq::Agent,
    base_url: String,
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NominatimClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Points the client at a different Nominatim instance (or a test
    /// server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(RESOLVE_TIMEOUT)
            // Nominatim's usage policy requires an identifying agent.
            .user_agent(concat!("meridian/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    fn parse_response(body: &str) -> Result<Coordinate, GeocodeError> {
        let places: Vec<Place> =
            serde_json::from_str(body).map_err(|err| GeocodeError::Malformed(err.to_string()))?;
        let Some(place) = places.first() else {
            return Err(GeocodeError::NotFound);
        };

        let lat: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::BadCoordinate(place.lat.clone()))?;
        let lng: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::BadCoordinate(place.lon.clone()))?;

        debug!(display_name = %place.display_name, lat, lng, "geocoded");
        Ok(Coordinate::new(lat, lng))
    }
}

impl Geocoder for NominatimClient {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        debug!(query, "resolving place name");

        let response = self
            .agent
            .get(&url)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, response) => GeocodeError::Status {
                    status,
                    body: response.into_string().unwrap_or_default(),
                },
                ureq::Error::Transport(transport) => GeocodeError::Transport(transport.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        Self::parse_response(&body)
    }
}
