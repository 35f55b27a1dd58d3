use std::fmt;

/// Classified failures from the one-shot position lookup
#[derive(Debug)]
pub enum GeoError {
    PermissionDenied(String),
    Unavailable(String),
    Timeout(String),
    Unknown(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeoError::PermissionDenied(e) => write!(f, "GeoError::PermissionDenied: {}", e),
            GeoError::Unavailable(e) => write!(f, "GeoError::Unavailable: {}", e),
            GeoError::Timeout(e) => write!(f, "GeoError::Timeout: {}", e),
            GeoError::Unknown(e) => write!(f, "GeoError::Unknown: {}", e),
        }
    }
}

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeoError::Timeout(e.to_string())
        } else if e.is_connect() {
            GeoError::Unavailable(e.to_string())
        } else {
            GeoError::Unknown(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        GeoError::Unknown(e.to_string())
    }
}
