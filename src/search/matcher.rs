//! Airport filtering and ranking.

use super::QueryPatterns;
use crate::data::Airport;

/// Maximum number of options returned for a query.
pub const MAX_OPTIONS: usize = 10;

/// A ranked search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    /// Index of the airport in the searched slice.
    pub index: usize,
    /// Code submitted when the option is selected.
    pub value: String,
    /// Display label: `"{city} ({value}) {name}"`.
    pub label: String,
    /// Lower ranks sort first.
    pub rank: u8,
}

/// Which code family a query of this length is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeMode {
    Iata,
    Icao,
    NamesOnly,
}

impl CodeMode {
    fn for_len(char_count: usize) -> Self {
        match char_count {
            3 => CodeMode::Iata,
            4 => CodeMode::Icao,
            _ => CodeMode::NamesOnly,
        }
    }
}

/// Returns up to [`MAX_OPTIONS`] airports matching `query`, best first.
///
/// Three-character queries also match IATA codes exactly, four-character
/// queries match ICAO codes exactly; every query matches the start of a word
/// in the city or airport name.
pub fn search_airports(query: &str, airports: &[Airport]) -> Vec<SearchOption> {
    let Some(patterns) = QueryPatterns::new(query) else {
        return Vec::new();
    };
    let mode = CodeMode::for_len(patterns.char_count);

    let mut options: Vec<SearchOption> = airports
        .iter()
        .enumerate()
        .filter(|(_, airport)| matches(airport, &patterns, mode))
        .map(|(index, airport)| {
            let value = option_value(airport, &patterns, mode).to_string();
            SearchOption {
                index,
                label: format!("{} ({}) {}", airport.city, value, airport.name),
                value,
                rank: rank(airport, &patterns),
            }
        })
        .collect();

    // Stable: equal ranks keep dataset order.
    options.sort_by_key(|option| option.rank);
    options.truncate(MAX_OPTIONS);
    options
}

fn matches(airport: &Airport, patterns: &QueryPatterns, mode: CodeMode) -> bool {
    let code_match = match mode {
        CodeMode::Iata => airport.iata.as_deref() == Some(patterns.upper.as_str()),
        CodeMode::Icao => airport.icao == patterns.upper,
        CodeMode::NamesOnly => false,
    };

    code_match || patterns.matches_word(&airport.city) || patterns.matches_word(&airport.name)
}

fn option_value<'a>(airport: &'a Airport, patterns: &QueryPatterns, mode: CodeMode) -> &'a str {
    if mode == CodeMode::Icao && airport.icao == patterns.upper {
        &airport.icao
    } else {
        airport.code()
    }
}

/// Tiers: exact code, exact city, city prefix, anything else. Airports
/// without an IATA code sort after the rest of their tier.
fn rank(airport: &Airport, patterns: &QueryPatterns) -> u8 {
    let exact_code = airport.icao == patterns.upper
        || airport.iata.as_deref() == Some(patterns.upper.as_str());

    let tier = if exact_code {
        0
    } else if patterns.matches_entire(&airport.city) {
        1
    } else if patterns.matches_prefix(&airport.city) {
        2
    } else {
        3
    };

    tier * 2 + u8::from(airport.iata.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(id: u32, name: &str, city: &str, iata: Option<&str>, icao: &str) -> Airport {
        Airport {
            id,
            name: name.to_string(),
            city: city.to_string(),
            iata: iata.map(str::to_string),
            icao: icao.to_string(),
            lat: 0.0,
            lng: 0.0,
        }
    }

    fn sample() -> Vec<Airport> {
        vec![
            airport(1, "Arna Field", "Arnborg", Some("ANB"), "XXAN"),
            airport(2, "Ube Airstrip", "Ube", None, "XUBE"),
            airport(3, "Stockholm Arlanda Airport", "Stockholm", Some("ARN"), "ESSA"),
            airport(4, "Barkarby Airfield", "Stockholm", None, "ESKB"),
            airport(5, "Stockholm Bromma Airport", "Stockholm", Some("BMA"), "ESSB"),
            airport(6, "Yamaguchi Ube Airport", "Ube", Some("UBJ"), "RJDC"),
            airport(7, "Uberlândia Airport", "Uberlândia", Some("UDI"), "SBUL"),
            airport(8, "Arnhem Heliport", "Arnhem", Some("ARH"), "EHAR"),
        ]
    }

    fn values(options: &[SearchOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let airports = sample();
        assert!(search_airports("", &airports).is_empty());
        assert!(search_airports("ar", &airports).is_empty());
    }

    #[test]
    fn test_three_letter_exact_iata_ranks_first() {
        let airports = sample();
        let options = search_airports("arn", &airports);

        assert_eq!(options[0].value, "ARN");
        assert_eq!(options[0].label, "Stockholm (ARN) Stockholm Arlanda Airport");
        // City prefix matches follow in dataset order.
        assert_eq!(values(&options), vec!["ARN", "ANB", "ARH"]);
    }

    #[test]
    fn test_exact_iata_beats_exact_city() {
        let mut airports = sample();
        // A city named exactly like the code, listed first.
        airports.insert(0, airport(9, "Somewhere Strip", "Arn", Some("QQQ"), "QQQQ"));
        let options = search_airports("ARN", &airports);

        assert_eq!(options[0].value, "ARN");
        assert_eq!(options[1].value, "QQQ");
    }

    #[test]
    fn test_four_letter_exact_icao_ranks_first() {
        let airports = sample();
        let options = search_airports("essb", &airports);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "ESSB");

        // ICAO match on an airport lacking IATA still outranks city matches.
        let options = search_airports("XUBE", &airports);
        assert_eq!(options[0].value, "XUBE");
    }

    #[test]
    fn test_four_letter_value_falls_back_to_iata() {
        let airports = sample();
        let options = search_airports("stoc", &airports);

        assert_eq!(values(&options), vec!["ARN", "BMA", "ESKB"]);
    }

    #[test]
    fn test_missing_iata_penalty_within_tier() {
        let airports = sample();
        let options = search_airports("ube", &airports);

        // Both are exact-city matches; the one with an IATA code wins.
        assert_eq!(values(&options)[..2], ["UBJ", "XUBE"]);
        assert_eq!(options[0].rank, 2);
        assert_eq!(options[1].rank, 3);
        // Prefix match comes after.
        assert_eq!(options[2].value, "UDI");
    }

    #[test]
    fn test_long_query_matches_names_only() {
        let airports = sample();
        let options = search_airports("bromma", &airports);

        assert_eq!(values(&options), vec!["BMA"]);
        assert!(search_airports("ESSB1", &airports).is_empty());
    }

    #[test]
    fn test_multi_word_query() {
        let airports = sample();
        let options = search_airports("stockholm-arlanda", &airports);
        assert_eq!(values(&options), vec!["ARN"]);
    }

    #[test]
    fn test_results_are_capped() {
        let airports: Vec<Airport> = (0..25)
            .map(|i| airport(i, &format!("Field {i}"), "Springfield", None, "ZZZZ"))
            .collect();
        let options = search_airports("springfield", &airports);

        assert_eq!(options.len(), MAX_OPTIONS);
        let indices: Vec<usize> = options.iter().map(|o| o.index).collect();
        assert_eq!(indices, (0..MAX_OPTIONS).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_code_always_first_across_dataset() {
        let dataset =
            crate::data::AirportDataset::from_csv(include_bytes!("../../assets/airports.csv"))
                .unwrap();
        for airport in dataset.as_slice() {
            if let Some(iata) = &airport.iata {
                let options = search_airports(&iata.to_lowercase(), dataset.as_slice());
                assert_eq!(options[0].value, *iata, "query {}", iata);
            }
            let options = search_airports(&airport.icao, dataset.as_slice());
            assert_eq!(options[0].value, airport.icao, "query {}", airport.icao);
        }
    }
}
