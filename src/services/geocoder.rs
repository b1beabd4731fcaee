use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::core::geo::GeoPoint;

/// Errors that can occur when resolving an address
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned error status: {0}")]
    ProviderError(reqwest::StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for a Nominatim-style geocoding provider
///
/// Address resolution fails soft: registration and profile updates proceed
/// without coordinates when an address cannot be resolved.
pub struct GeocodingClient {
    base_url: String,
    user_agent: String,
    client: Client,
}

impl GeocodingClient {
    pub fn new(base_url: String, user_agent: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            user_agent,
            client,
        }
    }

    /// Resolve an address to coordinates, or `None` when it cannot be
    ///
    /// Transport and provider failures are logged and collapse to `None`;
    /// callers never see an error from this method.
    pub async fn geocode(&self, address: &str) -> Option<GeoPoint> {
        match self.lookup(address).await {
            Ok(point) => point,
            Err(e) => {
                tracing::warn!("Geocoding failed for address {:?}: {}", address, e);
                None
            }
        }
    }

    async fn lookup(&self, address: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(address)
        );

        tracing::debug!("Geocoding address via {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::ProviderError(response.status()));
        }

        let json: Value = response.json().await?;

        let results = json
            .as_array()
            .ok_or_else(|| GeocodeError::InvalidResponse("Expected a result array".into()))?;

        let Some(first) = results.first() else {
            return Ok(None);
        };

        let lat = parse_coordinate(first, "lat")?;
        let lng = parse_coordinate(first, "lon")?;

        let point = GeoPoint::new(lat, lng)
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        Ok(Some(point))
    }
}

/// Nominatim serializes coordinates as strings
fn parse_coordinate(result: &Value, field: &str) -> Result<f64, GeocodeError> {
    result
        .get(field)
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::InvalidResponse(format!("Missing or malformed {}", field)))
}
