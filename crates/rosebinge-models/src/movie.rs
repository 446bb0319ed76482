use serde::{Deserialize, Serialize};

/// Internal movie record, the only shape callers ever see.
///
/// Sentinel conventions: `year == 0` and `rating == 0.0` mean the upstream
/// value was missing or unparseable. `Option<String>` fields are `None` when
/// the provider explicitly reported "N/A" for them. `genre`, `poster`,
/// `synopsis` and `director` carry fixed fallback values instead of `None`
/// so display code never has to special-case them.
///
/// A record is never mutated after construction; the cache replaces whole
/// entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: u32,
    pub rating: f64,
    pub genre: String,
    pub poster: String,
    pub synopsis: String,
    pub duration: Option<String>,
    pub cast: Vec<String>,
    pub director: String,
    /// Reserved, never populated by this layer.
    pub trailer: Option<String>,
    pub awards: Option<String>,
    pub rated: Option<String>,
    pub metascore: Option<String>,
    pub imdb_votes: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
}

/// One page of title-search results.
///
/// `total_results` is the provider's reported total across all pages, not
/// the number of records in `movies` (detail lookups that fail are dropped
/// from `movies` without affecting the count).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResults {
    pub movies: Vec<MovieRecord>,
    pub total_results: u64,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }
}
