//! Query tokenization and pattern building.

use regex::{Regex, RegexBuilder};

/// Queries shorter than this (in characters) produce no options.
pub const MIN_QUERY_CHARS: usize = 3;

/// Separator class accepted between query tokens.
const SEPARATOR_CLASS: &str = r"[.\-\s]+";

/// Patterns derived from a single search query.
///
/// Tokens are split on runs of `.`, `-` and whitespace and rejoined with the
/// same separator class, so "new-york", "New York" and "new.york" all match
/// the city "New York".
#[derive(Debug, Clone)]
pub struct QueryPatterns {
    /// The raw query upper-cased, compared against IATA/ICAO codes.
    pub upper: String,
    /// Number of characters in the raw query.
    pub char_count: usize,
    start_of_word: Regex,
    entire_string: Regex,
    start_of_string: Regex,
}

impl QueryPatterns {
    /// Builds the patterns for `query`.
    ///
    /// Returns `None` for queries that are empty or shorter than
    /// [`MIN_QUERY_CHARS`].
    pub fn new(query: &str) -> Option<Self> {
        let char_count = query.chars().count();
        if char_count < MIN_QUERY_CHARS {
            return None;
        }

        let body = split_tokens(query)
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(SEPARATOR_CLASS);

        Some(Self {
            upper: query.to_uppercase(),
            char_count,
            start_of_word: build(&format!(r"\b{body}"))?,
            entire_string: build(&format!("^{body}$"))?,
            start_of_string: build(&format!("^{body}"))?,
        })
    }

    /// Query matches at the start of any word in `text`.
    pub fn matches_word(&self, text: &str) -> bool {
        self.start_of_word.is_match(text)
    }

    /// Query matches all of `text`.
    pub fn matches_entire(&self, text: &str) -> bool {
        self.entire_string.is_match(text)
    }

    /// Query matches the beginning of `text`.
    pub fn matches_prefix(&self, text: &str) -> bool {
        self.start_of_string.is_match(text)
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == '-' || c.is_whitespace()
}

/// Splits on runs of separators, keeping empty leading/trailing tokens so a
/// trailing space in the query still requires a separator in the match.
fn split_tokens(query: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut token_start = Some(0);

    for (i, c) in query.char_indices() {
        match (is_separator(c), token_start) {
            (true, Some(start)) => {
                tokens.push(&query[start..i]);
                token_start = None;
            }
            (false, None) => token_start = Some(i),
            _ => {}
        }
    }
    tokens.push(token_start.map_or("", |start| &query[start..]));

    tokens
}

fn build(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Failed to build query pattern {:?}: {}", pattern, e);
            None
        }
    }
}
