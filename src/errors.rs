use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_geo::errors::GeoError;
use crate::manager_owm::errors::OWMError;
use crate::manager_store::errors::StoreError;

/// Classified failures surfaced by the dashboard. Whatever was on display
/// before the failing operation stays as it was.
#[derive(Debug)]
pub enum DashboardError {
    EmptyQuery,
    CityNotFound(String),
    Unauthorized(String),
    Weather(String),
    Geolocation(GeoError),
    Store(String),
}

impl DashboardError {
    /// Returns a human readable message suitable for direct display
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::EmptyQuery => {
                "Enter a city name to search.".to_string()
            }
            DashboardError::CityNotFound(_) => {
                "City not found. Please check the spelling and try again.".to_string()
            }
            DashboardError::Unauthorized(_) => {
                "Invalid API key. Please check your configuration.".to_string()
            }
            DashboardError::Weather(_) => {
                "Unable to fetch weather data. Please try again later.".to_string()
            }
            DashboardError::Geolocation(e) => {
                let reason = match e {
                    GeoError::PermissionDenied(_) => "Please allow location access.",
                    GeoError::Unavailable(_) => "Location information unavailable.",
                    GeoError::Timeout(_) => "Location request timed out.",
                    GeoError::Unknown(_) => "An unknown error occurred.",
                };
                format!("Unable to get your location. {}", reason)
            }
            DashboardError::Store(_) => {
                "Unable to remember the searched city.".to_string()
            }
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::EmptyQuery => write!(f, "DashboardError::EmptyQuery: empty search query"),
            DashboardError::CityNotFound(e) => write!(f, "DashboardError::CityNotFound: {}", e),
            DashboardError::Unauthorized(e) => write!(f, "DashboardError::Unauthorized: {}", e),
            DashboardError::Weather(e) => write!(f, "DashboardError::Weather: {}", e),
            DashboardError::Geolocation(e) => write!(f, "DashboardError::Geolocation: {}", e),
            DashboardError::Store(e) => write!(f, "DashboardError::Store: {}", e),
        }
    }
}

impl From<OWMError> for DashboardError {
    fn from(e: OWMError) -> Self {
        match e {
            OWMError::NotFound(m) => DashboardError::CityNotFound(m),
            OWMError::Unauthorized(m) => DashboardError::Unauthorized(m),
            OWMError::Service(m) => DashboardError::Weather(m),
            OWMError::Document(m) => DashboardError::Weather(m),
        }
    }
}
impl From<GeoError> for DashboardError {
    fn from(e: GeoError) -> Self { DashboardError::Geolocation(e) }
}
impl From<StoreError> for DashboardError {
    fn from(e: StoreError) -> Self { DashboardError::Store(e.to_string()) }
}

/// Errors while managing configuration
///
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owm_failures_map_to_display_classes() {
        let e: DashboardError = OWMError::NotFound("404".to_string()).into();
        assert!(matches!(e, DashboardError::CityNotFound(_)));

        let e: DashboardError = OWMError::Unauthorized("401".to_string()).into();
        assert!(matches!(e, DashboardError::Unauthorized(_)));

        let e: DashboardError = OWMError::Service("503".to_string()).into();
        assert!(matches!(e, DashboardError::Weather(_)));

        let e: DashboardError = OWMError::Document("bad json".to_string()).into();
        assert!(matches!(e, DashboardError::Weather(_)));
    }

    #[test]
    fn user_messages_match_the_failure_class() {
        let not_found: DashboardError = OWMError::NotFound("404".to_string()).into();
        assert_eq!(
            not_found.user_message(),
            "City not found. Please check the spelling and try again."
        );

        let timeout = DashboardError::Geolocation(GeoError::Timeout("10s".to_string()));
        assert_eq!(
            timeout.user_message(),
            "Unable to get your location. Location request timed out."
        );
    }
}
