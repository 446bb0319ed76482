use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved watchlist entry. Carries enough of the movie to render a list
/// without re-fetching; the id is the key for everything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub added_at: DateTime<Utc>,
}

/// One remembered search query, most recent kept first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentSearch {
    pub query: String,
    pub searched_at: DateTime<Utc>,
}
