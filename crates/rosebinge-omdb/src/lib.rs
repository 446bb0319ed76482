pub mod api;
pub mod client;
pub mod error;
pub mod normalize;
pub mod provider;

pub use api::{OmdbDetail, OmdbSearchHit, OmdbSearchPage};
pub use client::OmdbClient;
pub use error::OmdbError;
pub use provider::MovieProvider;
