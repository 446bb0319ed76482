pub mod movie;
pub mod watchlist;

pub use movie::{MovieRecord, SearchResults};
pub use watchlist::{RecentSearch, WatchlistEntry};
