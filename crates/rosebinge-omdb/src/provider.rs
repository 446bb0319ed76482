use async_trait::async_trait;

use crate::api::{OmdbDetail, OmdbSearchPage};
use crate::error::OmdbError;

/// Port for the external metadata provider.
///
/// `Ok(None)` means the provider explicitly answered "no such title" /
/// "no matches"; `Err` is reserved for transport and decode problems.
/// Callers that do not care about the distinction (the gateway does not,
/// by design) collapse both into an empty result.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch full detail for one title by its external id.
    async fn lookup(&self, id: &str) -> Result<Option<OmdbDetail>, OmdbError>;

    /// Free-text title search, paged.
    async fn search(&self, query: &str, page: u32) -> Result<Option<OmdbSearchPage>, OmdbError>;
}
