use serde::Deserialize;

/// Raw document from the IP geolocation endpoint
#[derive(Deserialize)]
pub struct FullPosition {
    pub status: Option<String>,
    pub message: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

/// A resolved geographic position
#[derive(Debug, Clone)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    /// The endpoint's own guess of the nearest city, when it has one
    pub city: Option<String>,
}
