//! The provider's movie payload: wire keys, the poster sentinel, and nothing
//! else. Fields are carried verbatim — the provider's strings are already
//! display-ready and are never normalized here.

use serde::Deserialize;

/// Marker string the provider sends in place of a poster URL when no image
/// exists for the title.
pub const POSTER_NOT_AVAILABLE: &str = "N/A";

/// One movie record as returned by a successful title lookup.
///
/// Constructed wholesale from the provider response and read-only after that;
/// the next search (or a failure) discards it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Released", default)]
    pub released: String,
}

impl MovieRecord {
    /// The poster URL, or `None` when the provider sent the "N/A" sentinel.
    /// Callers substitute their own placeholder art for `None`.
    pub fn poster_url(&self) -> Option<&str> {
        if self.poster == POSTER_NOT_AVAILABLE {
            None
        } else {
            Some(&self.poster)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_poster(poster: &str) -> MovieRecord {
        MovieRecord {
            title: "Heat".into(),
            year: "1995".into(),
            plot: String::new(),
            poster: poster.into(),
            imdb_rating: "8.3".into(),
            genre: "Crime, Drama".into(),
            director: "Michael Mann".into(),
            actors: "Al Pacino, Robert De Niro".into(),
            runtime: "170 min".into(),
            released: "15 Dec 1995".into(),
        }
    }

    #[test]
    fn test_poster_sentinel_maps_to_none() {
        let record = record_with_poster("N/A");
        assert_eq!(record.poster_url(), None);
    }

    #[test]
    fn test_real_poster_url_passes_through() {
        let record = record_with_poster("https://img.example/heat.jpg");
        assert_eq!(record.poster_url(), Some("https://img.example/heat.jpg"));
    }

    #[test]
    fn test_wire_keys_deserialize() {
        let json = r#"{
            "Title": "Blade Runner",
            "Year": "1982",
            "Plot": "A blade runner must pursue replicants.",
            "Poster": "https://img.example/br.jpg",
            "imdbRating": "8.1",
            "Genre": "Sci-Fi, Thriller",
            "Director": "Ridley Scott",
            "Actors": "Harrison Ford, Rutger Hauer",
            "Runtime": "117 min",
            "Released": "25 Jun 1982"
        }"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Blade Runner");
        assert_eq!(record.imdb_rating, "8.1");
        assert_eq!(record.released, "25 Jun 1982");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: MovieRecord = serde_json::from_str(r#"{"Title": "Pi"}"#).unwrap();
        assert_eq!(record.title, "Pi");
        assert_eq!(record.plot, "");
        assert_eq!(record.poster, "");
    }
}
