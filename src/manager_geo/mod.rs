pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::{Client, StatusCode};
use crate::manager_geo::errors::GeoError;
use crate::manager_geo::models::{FullPosition, Position};

/// Struct for managing one-shot position lookups against an IP geolocation endpoint
pub struct Geo {
    client: Client,
    endpoint: String,
}

impl Geo {
    /// Returns a Geo struct ready for position lookups
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - full url of the geolocation endpoint
    pub fn new(endpoint: &str) -> Result<Geo, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Resolves the current position. One request, no retries; the request
    /// carries its own timeout and failures come back classified.
    pub async fn locate(&self) -> Result<Position, GeoError> {
        let response = self.client
            .get(&self.endpoint)
            .send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GeoError::PermissionDenied(format!("geolocation endpoint refused the request: {}", status)));
        }
        if !status.is_success() {
            return Err(GeoError::Unavailable(format!("geolocation endpoint returned {}", status)));
        }

        let json = response.text().await?;
        let raw: FullPosition = serde_json::from_str(&json)?;

        if raw.status.as_deref() == Some("fail") {
            let reason = raw.message.unwrap_or_else(|| "no reason given".to_string());
            return Err(GeoError::Unavailable(format!("lookup failed: {}", reason)));
        }

        match (raw.lat, raw.lon) {
            (Some(lat), Some(lon)) => Ok(Position { lat, lon, city: raw.city }),
            _ => Err(GeoError::Unavailable("position missing in geolocation response".to_string())),
        }
    }
}
