use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::manager_owm::models::UnitSystem;

#[derive(Deserialize)]
pub struct WeatherApi {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub units: UnitSystem,
}

#[derive(Deserialize)]
pub struct Geolocation {
    #[serde(default = "default_geo_endpoint")]
    pub endpoint: String,
}

impl Default for Geolocation {
    fn default() -> Self {
        Geolocation { endpoint: default_geo_endpoint() }
    }
}

#[derive(Deserialize)]
pub struct Files {
    pub db_path: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub weather_api: WeatherApi,
    #[serde(default)]
    pub geolocation: Geolocation,
    pub files: Files,
    pub general: General,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_endpoint() -> String {
    "http://ip-api.com/json".to_string()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
