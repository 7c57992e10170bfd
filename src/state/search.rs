//! Airport search box state.

use crate::data::Airport;
use crate::search::{search_airports, SearchOption};

/// Query text, current suggestions and the airports picked so far.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text typed into the search box.
    pub query: String,
    /// Suggestions for `query`, best first.
    pub options: Vec<SearchOption>,
    /// Airports picked for the next route, in pick order.
    pub selected: Vec<SearchOption>,
    /// Query the current `options` were computed for.
    searched: String,
}

impl SearchState {
    /// Recomputes suggestions when the query text changed since the last call.
    pub fn refresh(&mut self, airports: &[Airport]) {
        if self.query == self.searched {
            return;
        }
        self.searched.clone_from(&self.query);
        self.options = search_airports(&self.query, airports);
    }

    /// Adds `option` to the selection and clears the query.
    pub fn select(&mut self, option: SearchOption) {
        self.selected.push(option);
        self.query.clear();
        self.searched.clear();
        self.options.clear();
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.selected.len() {
            self.selected.remove(index);
        }
    }

    /// Codes of the selected airports, emptying the selection.
    pub fn take_selected_codes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected)
            .into_iter()
            .map(|o| o.value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AirportDataset;

    fn dataset() -> AirportDataset {
        AirportDataset::from_csv(include_bytes!("../../assets/airports.csv")).unwrap()
    }

    #[test]
    fn test_refresh_only_on_change() {
        let dataset = dataset();
        let mut search = SearchState {
            query: "arn".to_string(),
            ..Default::default()
        };
        search.refresh(dataset.as_slice());
        assert_eq!(search.options[0].value, "ARN");

        search.options.clear();
        search.refresh(dataset.as_slice());
        assert!(search.options.is_empty());
    }

    #[test]
    fn test_select_and_take() {
        let dataset = dataset();
        let mut search = SearchState::default();
        for query in ["arn", "lhr"] {
            search.query = query.to_string();
            search.refresh(dataset.as_slice());
            let option = search.options[0].clone();
            search.select(option);
            assert!(search.query.is_empty());
        }
        search.remove(5);
        assert_eq!(search.take_selected_codes(), vec!["ARN", "LHR"]);
        assert!(search.selected.is_empty());
    }
}
