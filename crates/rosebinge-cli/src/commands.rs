use anyhow::Result;
use chrono::Utc;
use rosebinge_core::MovieGateway;
use rosebinge_models::WatchlistEntry;
use rosebinge_omdb::MovieProvider;

use crate::output;
use crate::store::Store;

pub async fn search<P: MovieProvider>(
    gateway: &MovieGateway<P>,
    store: &Store,
    query: &str,
    page: u32,
) -> Result<()> {
    let results = gateway.search_by_title(query, page).await;
    store.record_search(query)?;

    if results.movies.is_empty() {
        output::notice(format!("No results for \"{query}\""));
        return Ok(());
    }
    output::print_movies(&results.movies);
    output::success(format!(
        "{} of {} total results (page {})",
        results.movies.len(),
        results.total_results,
        page
    ));
    Ok(())
}

pub async fn movie<P: MovieProvider>(gateway: &MovieGateway<P>, id: &str) -> Result<()> {
    match gateway.fetch_by_id(id).await {
        Some(record) => output::print_movie_detail(&record),
        None => output::notice(format!("No movie found for id {id}")),
    }
    Ok(())
}

pub async fn featured<P: MovieProvider>(gateway: &MovieGateway<P>) -> Result<()> {
    output::print_movies(&gateway.fetch_featured().await);
    Ok(())
}

pub async fn trending<P: MovieProvider>(gateway: &MovieGateway<P>) -> Result<()> {
    output::print_movies(&gateway.fetch_trending().await);
    Ok(())
}

pub async fn genre<P: MovieProvider>(gateway: &MovieGateway<P>, name: &str) -> Result<()> {
    let movies = gateway.fetch_by_genre(name).await;
    if movies.is_empty() {
        output::notice(format!("Nothing in the featured set matches \"{name}\""));
        return Ok(());
    }
    output::print_movies(&movies);
    Ok(())
}

pub async fn watchlist_add<P: MovieProvider>(
    gateway: &MovieGateway<P>,
    store: &Store,
    id: &str,
) -> Result<()> {
    // Resolve the id first so the list never holds dangling entries.
    let Some(record) = gateway.fetch_by_id(id).await else {
        output::notice(format!("No movie found for id {id}, nothing added"));
        return Ok(());
    };

    let added = store.add_to_watchlist(WatchlistEntry {
        id: record.id.clone(),
        title: record.title.clone(),
        poster: record.poster.clone(),
        added_at: Utc::now(),
    })?;

    if added {
        output::success(format!("Added \"{}\" to watchlist", record.title));
    } else {
        output::notice(format!("\"{}\" is already on the watchlist", record.title));
    }
    Ok(())
}

pub fn watchlist_remove(store: &Store, id: &str) -> Result<()> {
    if store.remove_from_watchlist(id)? {
        output::success(format!("Removed {id} from watchlist"));
    } else {
        output::notice(format!("{id} was not on the watchlist"));
    }
    Ok(())
}

pub fn watchlist_list(store: &Store) -> Result<()> {
    output::print_watchlist(&store.load_watchlist());
    Ok(())
}

pub fn recent(store: &Store) -> Result<()> {
    output::print_recent_searches(&store.load_recent_searches());
    Ok(())
}
