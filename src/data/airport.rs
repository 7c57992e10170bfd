//! Airport reference data.
//!
//! Airports are loaded once from a CSV table with the header
//! `id,name,city,iata,icao,lat,lng`. Airports without an IATA code leave
//! that column empty.

use super::DataError;
use geo_types::Coord;
use serde::Deserialize;

/// A single airport record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub id: u32,
    pub name: String,
    pub city: String,
    /// Three-letter IATA code, absent for many small airfields.
    pub iata: Option<String>,
    /// Four-letter ICAO code.
    pub icao: String,
    pub lat: f64,
    pub lng: f64,
}

impl Airport {
    /// Geographic position as (x = lng, y = lat).
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// Preferred display code: IATA when present, otherwise ICAO.
    pub fn code(&self) -> &str {
        self.iata.as_deref().unwrap_or(&self.icao)
    }

    fn normalize(mut self) -> Self {
        self.icao = self.icao.trim().to_uppercase();
        self.iata = self
            .iata
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty());
        self.city = self.city.trim().to_string();
        self.name = self.name.trim().to_string();
        self
    }
}

/// One leg of a route, as indices into an [`AirportDataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sector {
    pub from: usize,
    pub to: usize,
}

impl Sector {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// True when both sectors join the same two airports, in either direction.
    pub fn same_pair(&self, other: &Sector) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

/// In-memory airport table.
#[derive(Debug, Clone, Default)]
pub struct AirportDataset {
    airports: Vec<Airport>,
}

impl AirportDataset {
    /// Parses the CSV table. Rows that fail to deserialize are skipped.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let mut airports = Vec::new();
        let mut skipped = 0usize;
        for (row, result) in reader.deserialize::<Airport>().enumerate() {
            match result {
                Ok(airport) => airports.push(airport.normalize()),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping airport row {}: {}", row + 1, e);
                }
            }
        }

        if airports.is_empty() {
            return Err(DataError::Empty("airports"));
        }
        if skipped > 0 {
            log::warn!("Skipped {} malformed airport row(s)", skipped);
        }

        Ok(Self { airports })
    }

    pub fn as_slice(&self) -> &[Airport] {
        &self.airports
    }

    pub fn get(&self, index: usize) -> Option<&Airport> {
        self.airports.get(index)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Finds an airport index by code, case-insensitively.
    ///
    /// IATA codes are checked before ICAO codes so that a three-letter code
    /// never resolves to an unrelated ICAO entry.
    pub fn find_by_code(&self, code: &str) -> Option<usize> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return None;
        }

        self.airports
            .iter()
            .position(|a| a.iata.as_deref() == Some(code.as_str()))
            .or_else(|| self.airports.iter().position(|a| a.icao == code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "id,name,city,iata,icao,lat,lng\n\
        1,Stockholm Arlanda Airport,Stockholm,ARN,ESSA,59.65,17.92\n\
        2,Barkarby Airfield,Stockholm,,ESKB,59.41,17.89\n\
        3,Broken Row,Nowhere,XXX,XXXX,not-a-number,0\n\
        4,London Heathrow Airport,London,lhr,egll,51.47,-0.46\n";

    #[test]
    fn test_from_csv_skips_malformed_rows() {
        let dataset = AirportDataset::from_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(1).unwrap().iata, None);
        assert_eq!(dataset.get(1).unwrap().code(), "ESKB");
    }

    #[test]
    fn test_codes_are_normalized() {
        let dataset = AirportDataset::from_csv(SAMPLE.as_bytes()).unwrap();
        let heathrow = dataset.get(2).unwrap();
        assert_eq!(heathrow.iata.as_deref(), Some("LHR"));
        assert_eq!(heathrow.icao, "EGLL");
    }

    #[test]
    fn test_find_by_code() {
        let dataset = AirportDataset::from_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.find_by_code("arn"), Some(0));
        assert_eq!(dataset.find_by_code("ESSA"), Some(0));
        assert_eq!(dataset.find_by_code(" eskb "), Some(1));
        assert_eq!(dataset.find_by_code("JFK"), None);
        assert_eq!(dataset.find_by_code(""), None);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let result = AirportDataset::from_csv(b"id,name,city,iata,icao,lat,lng\n");
        assert!(matches!(result, Err(DataError::Empty(_))));
    }

    #[test]
    fn test_embedded_table_parses() {
        let dataset =
            AirportDataset::from_csv(include_bytes!("../../assets/airports.csv")).unwrap();
        assert!(dataset.len() > 50);
        assert!(dataset.find_by_code("SYD").is_some());
    }
}
