use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Unit system used for fetching and displaying values
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Returns the value for the `units` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Returns the temperature suffix for display
    pub fn temp_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    /// Returns the wind speed suffix for display
    pub fn wind_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }
}

#[derive(Deserialize)]
pub struct FullCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
pub struct FullMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct FullWind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct FullSys {
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct FullCurrent {
    pub weather: Vec<FullCondition>,
    pub main: FullMain,
    pub visibility: Option<u32>,
    pub wind: FullWind,
    pub dt: i64,
    pub sys: FullSys,
    pub name: String,
}

#[derive(Deserialize)]
pub struct FullEntry {
    pub dt: i64,
    pub main: FullMain,
    pub weather: Vec<FullCondition>,
    pub wind: FullWind,
    pub visibility: Option<u32>,
}

#[derive(Deserialize)]
pub struct FullCity {
    pub name: String,
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullEntry>,
    pub city: FullCity,
}

/// Current conditions shaped for display
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub observed: DateTime<Local>,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub visibility: Option<u32>,
    pub description: String,
    pub icon: String,
    /// The 2.5 endpoints carry no UV data, so this stays `None`
    pub uv_index: Option<f64>,
}

/// One 3-hourly forecast reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    pub valid_time: DateTime<Local>,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub visibility: Option<u32>,
    pub description: String,
    pub icon: String,
}
