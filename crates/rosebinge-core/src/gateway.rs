use std::collections::HashMap;

use futures::future::join_all;
use rosebinge_models::{MovieRecord, SearchResults};
use rosebinge_omdb::{normalize, MovieProvider};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::catalog::{FEATURED_COUNT, FEATURED_MOVIE_IDS, TRENDING_MOVIE_IDS};

/// OMDb pages are 10 hits; cap detail fan-out to one page regardless of
/// what the provider sends back.
const SEARCH_DETAIL_LIMIT: usize = 10;

/// Sole boundary between the application and the metadata provider.
///
/// Owns an unbounded id-keyed cache of normalized records for the life of
/// the process. Failed lookups are never cached, so a transient provider
/// error costs a redundant call later rather than a poisoned entry.
/// Concurrent misses for the same id may both hit the provider; the writes
/// are idempotent, last one wins.
///
/// Every operation absorbs provider failures: callers see empty results or
/// `None`, never an error. Diagnostics go to the log.
pub struct MovieGateway<P: MovieProvider> {
    provider: P,
    cache: RwLock<HashMap<String, MovieRecord>>,
}

impl<P: MovieProvider> MovieGateway<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch one movie by external id, from cache when possible.
    ///
    /// `None` covers both "provider says no such title" and any transport
    /// or decode failure.
    pub async fn fetch_by_id(&self, id: &str) -> Option<MovieRecord> {
        if let Some(hit) = self.cache.read().await.get(id) {
            debug!(id, "movie cache hit");
            return Some(hit.clone());
        }

        let detail = match self.provider.lookup(id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => return None,
            Err(err) => {
                warn!(id, error = %err, "movie lookup failed");
                return None;
            }
        };

        let record = normalize::movie_record(detail);
        self.cache
            .write()
            .await
            .insert(id.to_string(), record.clone());
        Some(record)
    }

    /// Title search. Detail-fetches at most the first
    /// [`SEARCH_DETAIL_LIMIT`] hits concurrently, keeping the provider's
    /// result order; hits whose detail lookup fails are dropped.
    ///
    /// `total_results` is the provider's reported total for the whole
    /// query, independent of how many detail fetches survived.
    pub async fn search_by_title(&self, query: &str, page: u32) -> SearchResults {
        if query.trim().is_empty() {
            return SearchResults::empty();
        }

        let page = match self.provider.search(query, page).await {
            Ok(Some(page)) => page,
            Ok(None) => return SearchResults::empty(),
            Err(err) => {
                warn!(query, error = %err, "movie search failed");
                return SearchResults::empty();
            }
        };

        let total_results = normalize::total_results(&page.total_results);
        let lookups = page
            .hits
            .iter()
            .take(SEARCH_DETAIL_LIMIT)
            .map(|hit| self.fetch_by_id(&hit.imdb_id));
        let movies = join_all(lookups).await.into_iter().flatten().collect();

        SearchResults {
            movies,
            total_results,
        }
    }

    /// Fetch several ids concurrently. The result preserves the input
    /// order; ids that resolve to nothing are dropped.
    pub async fn fetch_multiple<I, S>(&self, ids: I) -> Vec<MovieRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookups = ids
            .into_iter()
            .map(|id| async move { self.fetch_by_id(id.as_ref()).await });
        join_all(lookups).await.into_iter().flatten().collect()
    }

    /// The curated home-page set.
    pub async fn fetch_featured(&self) -> Vec<MovieRecord> {
        self.fetch_multiple(FEATURED_MOVIE_IDS.iter().take(FEATURED_COUNT).copied())
            .await
    }

    /// The curated trending row.
    pub async fn fetch_trending(&self) -> Vec<MovieRecord> {
        self.fetch_multiple(TRENDING_MOVIE_IDS).await
    }

    /// Genre view: a case-insensitive substring filter over the featured
    /// set. `""` and `"all"` return the featured set unfiltered. See
    /// [`crate::catalog`] for why this is not a real genre query.
    pub async fn fetch_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        let featured = self.fetch_featured().await;
        if genre.is_empty() || genre == "all" {
            return featured;
        }

        let needle = genre.to_lowercase();
        featured
            .into_iter()
            .filter(|movie| movie.genre.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rosebinge_omdb::{OmdbDetail, OmdbError, OmdbSearchHit, OmdbSearchPage};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeProvider {
        movies: HashMap<String, OmdbDetail>,
        search_page: Option<OmdbSearchPage>,
        broken_ids: HashSet<String>,
        lookup_calls: AtomicUsize,
        search_calls: AtomicUsize,
    }

    impl FakeProvider {
        fn with_movies(details: Vec<OmdbDetail>) -> Self {
            Self {
                movies: details
                    .into_iter()
                    .map(|d| (d.imdb_id.clone(), d))
                    .collect(),
                ..Self::default()
            }
        }

        fn lookups(&self) -> usize {
            self.lookup_calls.load(Ordering::SeqCst)
        }

        fn searches(&self) -> usize {
            self.search_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MovieProvider for &FakeProvider {
        async fn lookup(&self, id: &str) -> Result<Option<OmdbDetail>, OmdbError> {
            self.lookup_calls.fetch_add(1, Ordering::SeqCst);
            if self.broken_ids.contains(id) {
                return Err(OmdbError::Api {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(self.movies.get(id).cloned())
        }

        async fn search(
            &self,
            _query: &str,
            _page: u32,
        ) -> Result<Option<OmdbSearchPage>, OmdbError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.search_page.clone())
        }
    }

    fn detail(id: &str, title: &str, genre: &str) -> OmdbDetail {
        OmdbDetail {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2010".to_string(),
            genre: genre.to_string(),
            imdb_rating: "8.0".to_string(),
            response: "True".to_string(),
            ..OmdbDetail::default()
        }
    }

    fn hit(id: &str) -> OmdbSearchHit {
        OmdbSearchHit {
            imdb_id: id.to_string(),
            ..OmdbSearchHit::default()
        }
    }

    #[tokio::test]
    async fn second_fetch_is_a_cache_hit() {
        let provider = FakeProvider::with_movies(vec![detail("tt1", "One", "Drama")]);
        let gateway = MovieGateway::new(&provider);

        let first = gateway.fetch_by_id("tt1").await.unwrap();
        let second = gateway.fetch_by_id("tt1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.lookups(), 1);
    }

    #[tokio::test]
    async fn failed_lookups_are_not_cached() {
        let provider = FakeProvider::with_movies(vec![]);
        let gateway = MovieGateway::new(&provider);

        assert!(gateway.fetch_by_id("tt404").await.is_none());
        assert!(gateway.fetch_by_id("tt404").await.is_none());
        // A miss goes back to the provider every time.
        assert_eq!(provider.lookups(), 2);
    }

    #[tokio::test]
    async fn provider_error_degrades_to_not_found() {
        let mut provider = FakeProvider::with_movies(vec![]);
        provider.broken_ids.insert("tt500".to_string());
        let gateway = MovieGateway::new(&provider);

        assert!(gateway.fetch_by_id("tt500").await.is_none());
    }

    #[tokio::test]
    async fn blank_queries_never_reach_the_provider() {
        let provider = FakeProvider::default();
        let gateway = MovieGateway::new(&provider);

        assert_eq!(gateway.search_by_title("", 1).await, SearchResults::empty());
        assert_eq!(
            gateway.search_by_title("   ", 1).await,
            SearchResults::empty()
        );
        assert_eq!(provider.searches(), 0);
    }

    #[tokio::test]
    async fn search_caps_details_and_keeps_provider_order() {
        let ids: Vec<String> = (0..15).map(|n| format!("tt{:03}", n)).collect();
        let mut provider = FakeProvider::with_movies(
            ids.iter()
                .map(|id| detail(id, &format!("Movie {id}"), "Drama"))
                .collect(),
        );
        provider.search_page = Some(OmdbSearchPage {
            hits: ids.iter().map(|id| hit(id)).collect(),
            total_results: "57".to_string(),
        });
        let gateway = MovieGateway::new(&provider);

        let results = gateway.search_by_title("movie", 1).await;

        assert_eq!(results.total_results, 57);
        assert_eq!(results.movies.len(), 10);
        let got: Vec<&str> = results.movies.iter().map(|m| m.id.as_str()).collect();
        let want: Vec<&str> = ids.iter().take(10).map(String::as_str).collect();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn search_total_survives_failed_details() {
        let mut provider = FakeProvider::with_movies(vec![detail("tt1", "One", "Drama")]);
        provider.search_page = Some(OmdbSearchPage {
            hits: vec![hit("tt1"), hit("tt404")],
            total_results: "2".to_string(),
        });
        let gateway = MovieGateway::new(&provider);

        let results = gateway.search_by_title("one", 1).await;
        assert_eq!(results.total_results, 2);
        assert_eq!(results.movies.len(), 1);
        assert_eq!(results.movies[0].id, "tt1");
    }

    #[tokio::test]
    async fn unparseable_total_is_zero() {
        let mut provider = FakeProvider::with_movies(vec![]);
        provider.search_page = Some(OmdbSearchPage {
            hits: vec![],
            total_results: "N/A".to_string(),
        });
        let gateway = MovieGateway::new(&provider);

        assert_eq!(gateway.search_by_title("x", 1).await.total_results, 0);
    }

    #[tokio::test]
    async fn fetch_multiple_preserves_order_and_drops_missing() {
        let provider = FakeProvider::with_movies(vec![
            detail("ttA", "A", "Drama"),
            detail("ttC", "C", "Drama"),
        ]);
        let gateway = MovieGateway::new(&provider);

        let movies = gateway.fetch_multiple(["ttA", "ttB", "ttC"]).await;
        let got: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(got, vec!["ttA", "ttC"]);
    }

    fn featured_fixture() -> FakeProvider {
        FakeProvider::with_movies(vec![
            detail("tt0111161", "The Shawshank Redemption", "Drama"),
            detail("tt0468569", "The Dark Knight", "Action, Crime, Drama"),
            detail("tt1375666", "Inception", "Action, Adventure, Sci-Fi"),
            detail("tt0110912", "Pulp Fiction", "Crime, Drama"),
        ])
    }

    #[tokio::test]
    async fn featured_is_capped_to_twelve_ids() {
        let provider = featured_fixture();
        let gateway = MovieGateway::new(&provider);

        let featured = gateway.fetch_featured().await;
        // Only the seeded ids resolve; the rest of the first twelve miss.
        assert_eq!(featured.len(), 4);
        assert_eq!(provider.lookups(), FEATURED_COUNT);
    }

    #[tokio::test]
    async fn genre_all_and_empty_match_featured() {
        let provider = featured_fixture();
        let gateway = MovieGateway::new(&provider);

        let featured = gateway.fetch_featured().await;
        assert_eq!(gateway.fetch_by_genre("all").await, featured);
        assert_eq!(gateway.fetch_by_genre("").await, featured);
    }

    #[tokio::test]
    async fn genre_filter_is_case_insensitive_substring() {
        let provider = featured_fixture();
        let gateway = MovieGateway::new(&provider);

        let crime = gateway.fetch_by_genre("CRIME").await;
        let got: Vec<&str> = crime.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(got, vec!["tt0468569", "tt0110912"]);

        let scifi = gateway.fetch_by_genre("sci-fi").await;
        assert_eq!(scifi.len(), 1);
        assert_eq!(scifi[0].id, "tt1375666");
    }

    #[tokio::test]
    async fn trending_uses_its_own_list() {
        let provider = FakeProvider::with_movies(vec![detail(
            "tt15398776",
            "Oppenheimer",
            "Biography, Drama, History",
        )]);
        let gateway = MovieGateway::new(&provider);

        let trending = gateway.fetch_trending().await;
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].title, "Oppenheimer");
        assert_eq!(provider.lookups(), TRENDING_MOVIE_IDS.len());
    }
}
