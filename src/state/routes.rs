//! Route list state.
//!
//! A route string holds one or more routes separated by `,`, `;`, `/` or a
//! newline. Each route is a chain of airport codes joined by `-`, for example
//! `ARN-LHR-JFK, SYD-AKL`.

use crate::data::{AirportDataset, Sector};
use crate::geo::sphere::{centroid, distance_km};
use geo_types::Coord;

/// Characters separating routes.
const ROUTE_SEPARATORS: [char; 4] = [',', ';', '/', '\n'];

/// Parsed routes, resolved against the airport table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteList {
    /// Unique sectors in input order.
    pub sectors: Vec<Sector>,
    /// Codes that matched no airport, uppercased, each listed once.
    pub unknown_codes: Vec<String>,
}

impl RouteList {
    /// Parses a route string.
    ///
    /// A chain is broken at an unknown code. Repeated sectors (in either
    /// direction) and sectors from an airport to itself are dropped.
    pub fn parse(input: &str, dataset: &AirportDataset) -> Self {
        let mut list = Self::default();

        for route in input.split(ROUTE_SEPARATORS) {
            let mut prev: Option<usize> = None;
            for code in route.split('-').map(str::trim).filter(|c| !c.is_empty()) {
                let Some(index) = dataset.find_by_code(code) else {
                    let code = code.to_uppercase();
                    if !list.unknown_codes.contains(&code) {
                        list.unknown_codes.push(code);
                    }
                    prev = None;
                    continue;
                };

                if let Some(from) = prev {
                    let sector = Sector::new(from, index);
                    if from != index && !list.sectors.iter().any(|s| s.same_pair(&sector)) {
                        list.sectors.push(sector);
                    }
                }
                prev = Some(index);
            }
        }

        list
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Airports used by any sector, in order of first appearance.
    pub fn airports(&self) -> Vec<usize> {
        let mut airports = Vec::new();
        for sector in &self.sectors {
            for index in [sector.from, sector.to] {
                if !airports.contains(&index) {
                    airports.push(index);
                }
            }
        }
        airports
    }

    /// Spherical centroid of the route airports.
    pub fn centroid(&self, dataset: &AirportDataset) -> Option<Coord<f64>> {
        centroid(
            self.airports()
                .into_iter()
                .filter_map(|i| dataset.get(i))
                .map(|a| a.coord()),
        )
    }

    /// Great-circle length of each sector in kilometers.
    pub fn sector_distances_km(&self, dataset: &AirportDataset) -> Vec<(Sector, f64)> {
        self.sectors
            .iter()
            .filter_map(|sector| {
                let from = dataset.get(sector.from)?;
                let to = dataset.get(sector.to)?;
                Some((*sector, distance_km(from.coord(), to.coord())))
            })
            .collect()
    }

    pub fn total_km(&self, dataset: &AirportDataset) -> f64 {
        self.sector_distances_km(dataset)
            .iter()
            .map(|(_, km)| km)
            .sum()
    }
}

/// Appends a route made of `codes` to an existing route string.
///
/// One trailing separator is stripped from `existing` first. Returns `None`
/// when `codes` is empty.
pub fn append_route<S: AsRef<str>>(existing: &str, codes: &[S]) -> Option<String> {
    if codes.is_empty() {
        return None;
    }
    let route = codes
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join("-");

    let existing = existing
        .strip_suffix(ROUTE_SEPARATORS)
        .unwrap_or(existing);
    if existing.is_empty() {
        Some(route)
    } else {
        Some(format!("{existing}, {route}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> AirportDataset {
        AirportDataset::from_csv(include_bytes!("../../assets/airports.csv")).unwrap()
    }

    fn codes(list: &RouteList, dataset: &AirportDataset) -> Vec<String> {
        list.sectors
            .iter()
            .map(|s| {
                format!(
                    "{}-{}",
                    dataset.get(s.from).unwrap().code(),
                    dataset.get(s.to).unwrap().code()
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_chains_and_separators() {
        let dataset = dataset();
        let list = RouteList::parse("arn-lhr-jfk; syd - akl\nFRA/CDG-FRA", &dataset);
        assert_eq!(
            codes(&list, &dataset),
            vec!["ARN-LHR", "LHR-JFK", "SYD-AKL", "CDG-FRA"]
        );
        assert!(list.unknown_codes.is_empty());
    }

    #[test]
    fn test_duplicate_and_zero_length_sectors_dropped() {
        let dataset = dataset();
        let list = RouteList::parse("ARN-LHR, LHR-ARN, ARN-ARN, ESSA-EGLL", &dataset);
        assert_eq!(codes(&list, &dataset), vec!["ARN-LHR"]);
    }

    #[test]
    fn test_unknown_codes_break_the_chain() {
        let dataset = dataset();
        let list = RouteList::parse("ARN-QQQ-LHR, zzz, qqq", &dataset);
        assert!(list.is_empty());
        assert_eq!(list.unknown_codes, vec!["QQQ", "ZZZ"]);
    }

    #[test]
    fn test_airports_in_first_appearance_order() {
        let dataset = dataset();
        let list = RouteList::parse("LHR-ARN, SYD-LHR", &dataset);
        let airports: Vec<&str> = list
            .airports()
            .into_iter()
            .map(|i| dataset.get(i).unwrap().code())
            .collect();
        assert_eq!(airports, vec!["LHR", "ARN", "SYD"]);
    }

    #[test]
    fn test_distances() {
        let dataset = dataset();
        let list = RouteList::parse("ARN-LHR-ARN", &dataset);
        let distances = list.sector_distances_km(&dataset);
        assert_eq!(distances.len(), 1);
        // Stockholm Arlanda to London Heathrow is roughly 1460 km.
        assert!((distances[0].1 - 1460.0).abs() < 30.0, "{}", distances[0].1);
        assert!((list.total_km(&dataset) - distances[0].1).abs() < 1e-9);
    }

    #[test]
    fn test_centroid() {
        let dataset = dataset();
        assert!(RouteList::default().centroid(&dataset).is_none());
        let center = RouteList::parse("ARN-LHR", &dataset).centroid(&dataset).unwrap();
        assert!(center.x > -1.0 && center.x < 18.0);
        assert!(center.y > 51.0 && center.y < 60.0);
    }

    #[test]
    fn test_append_route() {
        assert_eq!(append_route("", &["ARN", "LHR"]).as_deref(), Some("ARN-LHR"));
        assert_eq!(
            append_route("SYD-AKL,", &["ARN", "LHR"]).as_deref(),
            Some("SYD-AKL, ARN-LHR")
        );
        assert_eq!(
            append_route("SYD-AKL", &["ARN"]).as_deref(),
            Some("SYD-AKL, ARN")
        );
        // Only one trailing separator is stripped.
        assert_eq!(append_route(";\n", &["ARN"]).as_deref(), Some(";, ARN"));
        assert_eq!(append_route::<&str>("SYD-AKL", &[]), None);
    }
}
