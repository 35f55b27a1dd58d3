pub mod errors;
pub mod models;

use std::time::Duration;
use chrono::{DateTime, Local};
use reqwest::{Client, StatusCode};
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{
    CurrentConditions, ForecastEntry, FullCondition, FullCurrent, FullForecast, UnitSystem,
};

/// Location selector for the weather endpoints
#[derive(Debug, Clone)]
pub enum Place {
    City(String),
    Coords { lat: f64, lon: f64 },
}

/// Struct for managing weather data fetched from OpenWeatherMap
pub struct OWM {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching current conditions and forecasts
    ///
    /// # Arguments
    ///
    /// * 'api_key' - OpenWeatherMap API key
    /// * 'base_url' - base url of the 2.5 API, configurable so tests can point elsewhere
    pub fn new(api_key: &str, base_url: &str) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieves current conditions for the given place.
    ///
    /// # Arguments
    ///
    /// * 'place' - city name or coordinates to fetch for
    /// * 'units' - unit system the returned values should be expressed in
    pub async fn current(&self, place: &Place, units: UnitSystem) -> Result<CurrentConditions, OWMError> {
        let json = self.get("weather", place, units).await?;
        let raw: FullCurrent = serde_json::from_str(&json)?;

        let (description, icon) = first_condition(&raw.weather);

        Ok(CurrentConditions {
            city: raw.name,
            country: raw.sys.country,
            observed: local_time(raw.dt)?,
            temp: raw.main.temp,
            feels_like: raw.main.feels_like,
            temp_min: raw.main.temp_min,
            temp_max: raw.main.temp_max,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.speed,
            visibility: raw.visibility,
            description,
            icon,
            uv_index: None,
        })
    }

    /// Retrieves the 5 day / 3 hour forecast for the given place.
    /// The returned series keeps the provider order, one entry per 3 hour slot.
    ///
    /// # Arguments
    ///
    /// * 'place' - city name or coordinates to fetch for
    /// * 'units' - unit system the returned values should be expressed in
    pub async fn forecast(&self, place: &Place, units: UnitSystem) -> Result<Vec<ForecastEntry>, OWMError> {
        let json = self.get("forecast", place, units).await?;
        let raw: FullForecast = serde_json::from_str(&json)?;

        let mut series: Vec<ForecastEntry> = Vec::with_capacity(raw.list.len());

        for entry in raw.list {
            let (description, icon) = first_condition(&entry.weather);

            series.push(ForecastEntry {
                valid_time: local_time(entry.dt)?,
                temp: entry.main.temp,
                feels_like: entry.main.feels_like,
                temp_min: entry.main.temp_min,
                temp_max: entry.main.temp_max,
                humidity: entry.main.humidity,
                pressure: entry.main.pressure,
                wind_speed: entry.wind.speed,
                visibility: entry.visibility,
                description,
                icon,
            });
        }

        Ok(series)
    }

    /// Runs one GET against an endpoint and classifies the response status
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - endpoint name under the base url, "weather" or "forecast"
    /// * 'place' - city name or coordinates to fetch for
    /// * 'units' - unit system flag to forward
    async fn get(&self, endpoint: &str, place: &Place, units: UnitSystem) -> Result<String, OWMError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut req = self.client
            .get(url)
            .query(&[("appid", self.api_key.as_str()), ("units", units.as_query())]);

        req = match place {
            Place::City(name) => req.query(&[("q", name.as_str())]),
            Place::Coords { lat, lon } => {
                req.query(&[("lat", format!("{:0.4}", lat)), ("lon", format!("{:0.4}", lon))])
            }
        };

        let response = req.send().await?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                Err(OWMError::NotFound(format!("no weather data for the given place: {}", status)))
            }
            StatusCode::UNAUTHORIZED => {
                Err(OWMError::Unauthorized(format!("credential rejected: {}", status)))
            }
            s if !s.is_success() => {
                Err(OWMError::Service(format!("error while fetching from OpenWeatherMap: {}", s)))
            }
            _ => Ok(response.text().await?),
        }
    }
}

/// Picks description and icon from the leading condition entry.
/// The provider always sends at least one, but an empty list falls back to empty strings.
fn first_condition(conditions: &[FullCondition]) -> (String, String) {
    conditions
        .first()
        .map(|c| (c.description.clone(), c.icon.clone()))
        .unwrap_or_default()
}

/// Converts an epoch timestamp to local time
fn local_time(dt: i64) -> Result<DateTime<Local>, OWMError> {
    DateTime::from_timestamp(dt, 0)
        .map(|t| t.with_timezone(&Local))
        .ok_or_else(|| OWMError::Document(format!("timestamp {} out of range", dt)))
}
