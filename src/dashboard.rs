use log::info;
use serde::Serialize;
use crate::aggregator::{daily_summaries, hourly_window, DailySummary};
use crate::config::Config;
use crate::errors::DashboardError;
use crate::manager_geo::Geo;
use crate::manager_owm::models::{CurrentConditions, ForecastEntry, UnitSystem};
use crate::manager_owm::{Place, OWM};
use crate::manager_store::Store;

/// Display ready weather for one successfully fetched place
#[derive(Debug, Clone, Serialize)]
pub struct DisplayData {
    pub city: String,
    pub current: CurrentConditions,
    pub daily: Vec<DailySummary>,
    pub hourly: Vec<ForecastEntry>,
    /// The unit system the values were fetched under
    pub units: UnitSystem,
}

/// The dashboard controller. Owns the provider, geolocation and store handles,
/// the active unit system and the last successfully fetched display data.
///
/// One fetch cycle is two provider requests, current conditions plus forecast,
/// treated as a single logical operation: the displayed data is only replaced
/// when both succeed. Calls are serialized through `&mut self`; nothing here
/// sequences overlapping fetches issued by separate dashboards.
pub struct Dashboard {
    owm: OWM,
    geo: Geo,
    store: Store,
    units: UnitSystem,
    display: Option<DisplayData>,
}

impl Dashboard {
    /// Creates a dashboard with all collaborators built from configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - the full application configuration
    pub fn new(config: &Config) -> Result<Dashboard, DashboardError> {
        let owm = OWM::new(&config.weather_api.api_key, &config.weather_api.base_url)?;
        let geo = Geo::new(&config.geolocation.endpoint)?;
        let store = Store::new(&config.files.db_path)?;

        Ok(Dashboard {
            owm,
            geo,
            store,
            units: config.weather_api.units,
            display: None,
        })
    }

    /// Returns the currently displayable weather, if any fetch has succeeded
    pub fn display(&self) -> Option<&DisplayData> {
        self.display.as_ref()
    }

    /// Returns the active unit system
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Restores the city stored by an earlier run and fetches weather for it.
    /// Returns false when no city has ever been stored.
    pub async fn restore(&mut self) -> Result<bool, DashboardError> {
        match self.store.get_last_city()? {
            Some(city) => {
                info!("restoring last searched city {}", city);
                self.search(&city).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fetches weather for a city by name. The query is trimmed and an empty
    /// result is rejected before any request goes out.
    ///
    /// # Arguments
    ///
    /// * 'query' - city name as typed by the user
    pub async fn search(&mut self, query: &str) -> Result<&DisplayData, DashboardError> {
        let city = query.trim();
        if city.is_empty() {
            return Err(DashboardError::EmptyQuery);
        }

        self.refresh(Place::City(city.to_string())).await
    }

    /// Resolves the current position and fetches weather for it. The city name
    /// under which the result is displayed and stored is the one the weather
    /// provider reports for the coordinates.
    pub async fn locate(&mut self) -> Result<&DisplayData, DashboardError> {
        let position = self.geo.locate().await?;
        info!("geolocated to {:0.4}/{:0.4}", position.lat, position.lon);

        self.refresh(Place::Coords { lat: position.lat, lon: position.lon }).await
    }

    /// Switches the unit system. A real switch drops the displayed data, since
    /// its values are in the old units, and refetches the stored city when
    /// there is one. Returns the fresh display data, or None when nothing
    /// could be refetched.
    ///
    /// # Arguments
    ///
    /// * 'units' - the unit system to switch to
    pub async fn set_units(&mut self, units: UnitSystem) -> Result<Option<&DisplayData>, DashboardError> {
        if units == self.units {
            return Ok(self.display.as_ref());
        }

        self.units = units;
        self.display = None;

        match self.store.get_last_city()? {
            Some(city) => self.refresh(Place::City(city)).await.map(Some),
            None => Ok(None),
        }
    }

    /// Runs one fetch cycle for a place. Both requests must succeed before
    /// the display data is replaced and the resolved city name stored; on any
    /// failure the previous display data stays untouched.
    async fn refresh(&mut self, place: Place) -> Result<&DisplayData, DashboardError> {
        let current = self.owm.current(&place, self.units).await?;
        let series = self.owm.forecast(&place, self.units).await?;

        let daily = daily_summaries(&series);
        let hourly = hourly_window(&series);

        let data = DisplayData {
            city: current.city.clone(),
            current,
            daily,
            hourly,
            units: self.units,
        };

        let shown = self.display.insert(data);
        self.store.set_last_city(&shown.city)?;
        info!("displaying weather for {}", shown.city);

        Ok(&*shown)
    }
}
