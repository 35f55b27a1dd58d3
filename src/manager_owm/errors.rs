use std::fmt;

/// Errors from the OpenWeatherMap endpoints, classified so callers can tell
/// a misspelled city from a bad credential from a transient failure
#[derive(Debug)]
pub enum OWMError {
    NotFound(String),
    Unauthorized(String),
    Service(String),
    Document(String),
}

impl fmt::Display for OWMError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OWMError::NotFound(e) => write!(f, "OWMError::NotFound: {}", e),
            OWMError::Unauthorized(e) => write!(f, "OWMError::Unauthorized: {}", e),
            OWMError::Service(e) => write!(f, "OWMError::Service: {}", e),
            OWMError::Document(e) => write!(f, "OWMError::Document: {}", e),
        }
    }
}

impl From<reqwest::Error> for OWMError {
    fn from(e: reqwest::Error) -> Self {
        OWMError::Service(e.to_string())
    }
}

impl From<serde_json::Error> for OWMError {
    fn from(e: serde_json::Error) -> Self {
        OWMError::Document(e.to_string())
    }
}
