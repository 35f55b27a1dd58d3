use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "StoreError: {}", self.0)
    }
}
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self { StoreError(err.to_string()) }
}
