use serde::{Deserialize, Serialize};

/// OMDb uses the literal string "N/A" wherever it has no value for a field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Full detail payload for a single title, as it comes off the wire.
///
/// Every field is a string on the OMDb side, including numeric ones like
/// `Year` and `imdbRating`. Parsing happens in [`crate::normalize`], not
/// here. Missing fields default to empty strings so a "Response": "False"
/// body still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbDetail {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    pub response: String,
    pub error: Option<String>,
}

impl OmdbDetail {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// Lightweight summary record from the title-search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbSearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
}

/// Raw search response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct OmdbSearchPayload {
    pub search: Vec<OmdbSearchHit>,
    #[serde(rename = "totalResults")]
    pub total_results: String,
    pub response: String,
    pub error: Option<String>,
}

impl OmdbSearchPayload {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// One page of search hits plus the provider's reported total, still
/// unparsed (OMDb sends `totalResults` as a string).
#[derive(Debug, Clone, Default)]
pub struct OmdbSearchPage {
    pub hits: Vec<OmdbSearchHit>,
    pub total_results: String,
}
