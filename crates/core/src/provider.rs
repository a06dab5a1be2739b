//! OMDb-compatible provider client: one GET per lookup, no retries, no
//! caching. The response body is parsed separately from the transport so the
//! wire handling stays testable without a live endpoint.

use serde::Deserialize;
use thiserror::Error;

use crate::types::MovieRecord;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Shown when a failure carries no message text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// A failed title lookup. The rendered message is exactly what the user sees.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The transport reported a non-success HTTP status.
    #[error("Network response was not ok")]
    Network,
    /// The provider answered but its payload discriminator signalled no
    /// match; the message is the provider's own text.
    #[error("{0}")]
    NotFound(String),
    /// Connection-level failure before any status was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The body was not the JSON shape the provider documents.
    #[error("Unexpected response from the movie provider")]
    Malformed(#[from] serde_json::Error),
}

impl LookupError {
    /// User-facing message, with a fixed fallback for failures that carry no
    /// text (an empty `NotFound` from the provider, for instance).
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Provider endpoint and credentials, read from the environment once at
/// startup and injected at construction. Never consulted ambiently per call.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    /// Read `OMDB_BASE_URL` / `OMDB_API_KEY`. A missing key is carried as an
    /// empty string; the provider rejects it server-side and the failure
    /// surfaces through the normal lookup path.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            api_key: std::env::var("OMDB_API_KEY").unwrap_or_default(),
        }
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Async client for title lookups. Cheap to clone — the inner reqwest client
/// is reference-counted.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Look up a title. Exactly one GET, one attempt; query-string encoding
    /// is handled by reqwest. Empty titles are forwarded as-is.
    pub async fn lookup(&self, title: &str) -> Result<MovieRecord, LookupError> {
        tracing::debug!(%title, "looking up title");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("t", title), ("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "provider returned non-success status");
            return Err(LookupError::Network);
        }

        let body = response.text().await?;
        parse_lookup_body(&body)
    }
}

/// Wire shape of a lookup response. The provider multiplexes hits and misses
/// over HTTP 200 and discriminates with the `Response` field.
#[derive(Deserialize)]
struct LookupPayload {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: String,
    #[serde(flatten)]
    record: MovieRecord,
}

/// Parse a success-status body into a record or a `NotFound`.
pub fn parse_lookup_body(body: &str) -> Result<MovieRecord, LookupError> {
    let payload: LookupPayload = serde_json::from_str(body)?;
    if payload.response == "False" {
        tracing::warn!(message = %payload.error, "provider reported no match");
        return Err(LookupError::NotFound(payload.error));
    }
    Ok(payload.record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FOUND_BODY: &str = r#"{
        "Title": "Alien",
        "Year": "1979",
        "Plot": "The crew of a commercial spacecraft encounters a deadly lifeform.",
        "Poster": "https://img.example/alien.jpg",
        "imdbRating": "8.5",
        "Genre": "Horror, Sci-Fi",
        "Director": "Ridley Scott",
        "Actors": "Sigourney Weaver, Tom Skerritt",
        "Runtime": "117 min",
        "Released": "22 Jun 1979",
        "Response": "True"
    }"#;

    #[test]
    fn test_parse_found_record() {
        let record = parse_lookup_body(FOUND_BODY).unwrap();
        assert_eq!(record.title, "Alien");
        assert_eq!(record.year, "1979");
        assert_eq!(record.runtime, "117 min");
        assert_eq!(record.poster_url(), Some("https://img.example/alien.jpg"));
    }

    #[test]
    fn test_parse_not_found_carries_provider_message() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let err = parse_lookup_body(body).unwrap_err();
        match &err {
            LookupError::NotFound(message) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(err.user_message(), "Movie not found!");
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_lookup_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[test]
    fn test_network_error_message_is_fixed() {
        assert_eq!(LookupError::Network.to_string(), "Network response was not ok");
    }

    #[test]
    fn test_empty_provider_message_falls_back() {
        let err = LookupError::NotFound(String::new());
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::new(DEFAULT_BASE_URL, "");
        assert_eq!(config.base_url, "https://www.omdbapi.com/");
        assert!(config.api_key.is_empty());
    }
}
