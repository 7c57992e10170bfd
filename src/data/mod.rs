//! Static reference data embedded into the application.
//!
//! ## Airports
//! - `airport`: airport records parsed from the embedded CSV table, with
//!   case-insensitive lookup by IATA or ICAO code.
//!
//! Land polygons live with the rest of the geographic code in `crate::geo`
//! but share the [`DataError`] type defined here.

pub mod airport;

pub use airport::{Airport, AirportDataset, Sector};

/// Errors raised while loading embedded datasets.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read airport table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Dataset is empty: {0}")]
    Empty(&'static str),
}
