use rosebinge_models::MovieRecord;

use crate::api::{OmdbDetail, NOT_AVAILABLE};

/// Poster URL substituted when OMDb has no artwork for a title.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Synopsis substituted when OMDb has no plot text.
pub const NO_SYNOPSIS: &str = "No synopsis available.";

/// Map a raw OMDb detail payload to the internal record shape.
///
/// Applied exactly once per record, on the success path only. The "N/A"
/// sentinel becomes `None` for the optional fields and a fixed fallback for
/// genre, poster, synopsis and director.
pub fn movie_record(raw: OmdbDetail) -> MovieRecord {
    MovieRecord {
        id: raw.imdb_id,
        title: raw.title,
        year: parse_year(&raw.year),
        rating: parse_rating(&raw.imdb_rating),
        genre: fallback(raw.genre, "Unknown"),
        poster: fallback(raw.poster, PLACEHOLDER_POSTER),
        synopsis: fallback(raw.plot, NO_SYNOPSIS),
        duration: optional(raw.runtime),
        cast: split_actors(&raw.actors),
        director: fallback(raw.director, "Unknown"),
        trailer: None,
        awards: optional(raw.awards),
        rated: optional(raw.rated),
        metascore: optional(raw.metascore),
        imdb_votes: optional(raw.imdb_votes),
        country: optional(raw.country),
        language: optional(raw.language),
    }
}

/// Parse the provider's reported total-result count, 0 if unparseable.
pub fn total_results(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

fn not_available(value: &str) -> bool {
    value.is_empty() || value == NOT_AVAILABLE
}

fn optional(value: String) -> Option<String> {
    if not_available(&value) {
        None
    } else {
        Some(value)
    }
}

fn fallback(value: String, default: &str) -> String {
    if not_available(&value) {
        default.to_string()
    } else {
        value
    }
}

/// Lenient year parse: take the leading digit run, so series ranges like
/// "2011–2013" yield 2011. Anything without a leading digit yields 0.
fn parse_year(raw: &str) -> u32 {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn parse_rating(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn split_actors(raw: &str) -> Vec<String> {
    if not_available(raw) {
        return Vec::new();
    }
    raw.split(", ").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> OmdbDetail {
        OmdbDetail {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            rated: "PG-13".to_string(),
            runtime: "148 min".to_string(),
            genre: "Action, Adventure, Sci-Fi".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page".to_string(),
            plot: "A thief who steals corporate secrets.".to_string(),
            language: "English".to_string(),
            country: "United States".to_string(),
            awards: "Won 4 Oscars".to_string(),
            poster: "https://m.media-amazon.com/images/inception.jpg".to_string(),
            metascore: "74".to_string(),
            imdb_rating: "8.8".to_string(),
            imdb_votes: "2,345,678".to_string(),
            response: "True".to_string(),
            error: None,
        }
    }

    #[test]
    fn maps_populated_payload_verbatim() {
        let record = movie_record(detail());

        assert_eq!(record.id, "tt1375666");
        assert_eq!(record.title, "Inception");
        assert_eq!(record.year, 2010);
        assert_eq!(record.rating, 8.8);
        assert_eq!(record.genre, "Action, Adventure, Sci-Fi");
        assert_eq!(record.duration.as_deref(), Some("148 min"));
        assert_eq!(record.director, "Christopher Nolan");
        assert_eq!(record.cast.len(), 3);
        assert_eq!(record.cast[0], "Leonardo DiCaprio");
        assert_eq!(record.metascore.as_deref(), Some("74"));
        assert!(record.trailer.is_none());
    }

    #[test]
    fn not_available_fields_get_sentinels() {
        let raw = OmdbDetail {
            year: "N/A".to_string(),
            poster: "N/A".to_string(),
            actors: "N/A".to_string(),
            plot: "N/A".to_string(),
            genre: "N/A".to_string(),
            director: "N/A".to_string(),
            imdb_rating: "N/A".to_string(),
            ..detail()
        };

        let record = movie_record(raw);
        assert_eq!(record.year, 0);
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.poster, PLACEHOLDER_POSTER);
        assert!(record.cast.is_empty());
        assert_eq!(record.synopsis, NO_SYNOPSIS);
        assert_eq!(record.genre, "Unknown");
        assert_eq!(record.director, "Unknown");
    }

    #[test]
    fn not_available_optionals_become_none() {
        let raw = OmdbDetail {
            runtime: "N/A".to_string(),
            awards: "N/A".to_string(),
            rated: "N/A".to_string(),
            metascore: "N/A".to_string(),
            imdb_votes: "N/A".to_string(),
            country: "N/A".to_string(),
            language: "N/A".to_string(),
            ..detail()
        };

        let record = movie_record(raw);
        assert!(record.duration.is_none());
        assert!(record.awards.is_none());
        assert!(record.rated.is_none());
        assert!(record.metascore.is_none());
        assert!(record.imdb_votes.is_none());
        assert!(record.country.is_none());
        assert!(record.language.is_none());
    }

    #[test]
    fn year_parse_is_lenient() {
        assert_eq!(parse_year("2010"), 2010);
        assert_eq!(parse_year("2011–2013"), 2011);
        assert_eq!(parse_year(" 1999 "), 1999);
        assert_eq!(parse_year("N/A"), 0);
        assert_eq!(parse_year(""), 0);
    }

    #[test]
    fn total_results_zero_on_garbage() {
        assert_eq!(total_results("57"), 57);
        assert_eq!(total_results("N/A"), 0);
        assert_eq!(total_results(""), 0);
    }

    #[test]
    fn single_actor_is_a_one_element_cast() {
        let raw = OmdbDetail {
            actors: "Tom Hanks".to_string(),
            ..detail()
        };
        assert_eq!(movie_record(raw).cast, vec!["Tom Hanks".to_string()]);
    }
}
