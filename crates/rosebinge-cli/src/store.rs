use anyhow::{anyhow, Result};
use chrono::Utc;
use rosebinge_config::PathManager;
use rosebinge_models::{RecentSearch, WatchlistEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The watchlist view and search bar only ever show a handful of past
/// queries; keep the file bounded.
const RECENT_SEARCH_CAP: usize = 10;

/// JSON-file persistence for the watchlist and recent-search history.
///
/// A corrupt or unreadable file degrades to an empty list with a warning;
/// nothing here is worth failing a command over.
pub struct Store {
    watchlist_path: PathBuf,
    recent_path: PathBuf,
}

impl Store {
    pub fn new(paths: &PathManager) -> Result<Self> {
        std::fs::create_dir_all(paths.data_dir())?;
        Ok(Self {
            watchlist_path: paths.watchlist_file(),
            recent_path: paths.recent_searches_file(),
        })
    }

    pub fn load_watchlist(&self) -> Vec<WatchlistEntry> {
        load_list(&self.watchlist_path)
    }

    /// Add an entry unless its id is already present. Returns whether the
    /// list changed.
    pub fn add_to_watchlist(&self, entry: WatchlistEntry) -> Result<bool> {
        let mut entries = self.load_watchlist();
        if entries.iter().any(|e| e.id == entry.id) {
            return Ok(false);
        }
        entries.push(entry);
        save_list(&self.watchlist_path, &entries)?;
        Ok(true)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove_from_watchlist(&self, id: &str) -> Result<bool> {
        let mut entries = self.load_watchlist();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        save_list(&self.watchlist_path, &entries)?;
        Ok(true)
    }

    pub fn load_recent_searches(&self) -> Vec<RecentSearch> {
        load_list(&self.recent_path)
    }

    /// Remember a query: most recent first, case-insensitive dedup, capped.
    pub fn record_search(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut searches = self.load_recent_searches();
        searches.retain(|s| !s.query.eq_ignore_ascii_case(query));
        searches.insert(
            0,
            RecentSearch {
                query: query.to_string(),
                searched_at: Utc::now(),
            },
        );
        searches.truncate(RECENT_SEARCH_CAP);
        save_list(&self.recent_path, &searches)
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        debug!(path = %path.display(), "store file does not exist yet");
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store file is corrupt, starting empty");
                Vec::new()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read store file");
            Vec::new()
        }
    }
}

fn save_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json).map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))
}
