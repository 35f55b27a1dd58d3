pub mod errors;

use rusqlite::{params, Connection};
use crate::manager_store::errors::StoreError;

const LAST_CITY_KEY: &str = "last_city";

/// Small key-value store backed by SQLite. Holds the one piece of state that
/// survives between runs, the name of the most recently searched city.
pub struct Store {
    db_conn: Connection,
}

impl Store {

    /// Creates a new instance of Store
    ///
    /// # Arguments
    ///
    /// * 'db_path' - full path to db file
    pub fn new(db_path: &str) -> Result<Self, StoreError> {
        let db_conn = Connection::open(db_path)?;
        db_conn.execute(
           "CREATE TABLE IF NOT EXISTS settings (
                key text not null primary key,
                value text not null
           )",
           [],
        )?;

        Ok(Store { db_conn })
    }

    /// Returns the most recently searched city, or None if nothing has been
    /// stored yet
    pub fn get_last_city(&self) -> Result<Option<String>, StoreError> {
        let mut stmt = self.db_conn.prepare(
            "SELECT value FROM settings WHERE key = ?1;",
        )?;

        let response: rusqlite::Result<String> = stmt.query_one(params![LAST_CITY_KEY], |row| row.get(0));
        match response {
            Ok(city) => Ok(Some(city)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    /// Stores the most recently searched city, replacing any earlier value
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as resolved by the weather provider
    pub fn set_last_city(&self, city: &str) -> Result<(), StoreError> {
        self.db_conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![LAST_CITY_KEY, city],
        )?;

        Ok(())
    }
}
