//! Airport autocomplete.
//!
//! Turns a partial text query into a short, ranked list of airports:
//! - `query`: tokenizes the query and builds the separator-tolerant patterns
//! - `matcher`: filters and ranks the airport table against those patterns

mod matcher;
mod query;

pub use matcher::{search_airports, SearchOption};
pub use query::{QueryPatterns, MIN_QUERY_CHARS};
