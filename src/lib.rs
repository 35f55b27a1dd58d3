//! Weather dashboard built on the OpenWeatherMap 2.5 API.
//!
//! Fetches current conditions and the 5 day / 3 hour forecast for a city or
//! for the current position, folds the forecast into daily and hourly display
//! views and remembers the last successfully searched city between runs. The
//! crate exposes no surface of its own beyond this library API; rendering is
//! up to whatever embeds it.

pub mod errors;
pub mod config;
pub mod logging;
pub mod initialization;
pub mod aggregator;
pub mod formatting;
pub mod dashboard;
pub mod manager_owm;
pub mod manager_geo;
pub mod manager_store;

pub use aggregator::{daily_summaries, hourly_window, DailySummary};
pub use config::{load_config, Config};
pub use dashboard::{Dashboard, DisplayData};
pub use errors::DashboardError;
pub use manager_owm::models::{CurrentConditions, ForecastEntry, UnitSystem};
pub use manager_owm::Place;
