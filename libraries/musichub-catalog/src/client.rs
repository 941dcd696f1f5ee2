//! TheAudioDB gateway client.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, SearchedTrack, TrackListResponse, TrendingResponse, TrendingTrack};
use futures_util::future;
use musichub_core::types::Track;
use std::time::Duration;
use tracing::{debug, warn};

/// Search results are capped at the first N records.
const SEARCH_RESULT_LIMIT: usize = 10;

/// The fixed artist/track catalog behind [`AudioDbClient::example_songs`].
///
/// Artist keys use the underscore form the API expects in query strings.
const EXAMPLE_CATALOG: &[(&str, &[&str])] = &[
    ("coldplay", &["yellow", "clocks", "fix_you"]),
    ("the_beatles", &["hey_jude", "let_it_be"]),
    ("queen", &["bohemian_rhapsody", "under_pressure"]),
    ("pink_floyd", &["time", "money"]),
    ("led_zeppelin", &["kashmir", "stairway_to_heaven"]),
    ("the_who", &["baba_o_riley"]),
    ("mac_demarco", &["chamber_of_reflection"]),
    ("imagine_dragons", &["believer", "radioactive"]),
];

/// Client for the TheAudioDB metadata API.
///
/// Stateless: every method issues its own requests and adapts the
/// response into [`Track`] records. Failures never propagate — each
/// public method swallows, logs, and returns an empty list.
pub struct AudioDbClient {
    http: reqwest::Client,
    root: String,
}

impl AudioDbClient {
    /// Create a client from the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base = config.base_url.trim_end_matches('/').to_string();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MusicHub/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            root: format!("{}/api/v1/json/{}", base, config.api_key),
        })
    }

    /// The composed endpoint root, without a trailing slash.
    pub fn endpoint_root(&self) -> &str {
        &self.root
    }

    /// Search tracks by free-text query.
    ///
    /// Returns at most the first ten records; any failure yields an
    /// empty list.
    pub async fn search_track(&self, query: &str) -> Vec<Track> {
        match self.fetch_search(query).await {
            Ok(records) => records
                .into_iter()
                .take(SEARCH_RESULT_LIMIT)
                .map(Track::from)
                .collect(),
            Err(err) => {
                warn!(query, error = %err, "track search failed");
                Vec::new()
            }
        }
    }

    /// Trending singles for one region code (e.g. `us`, `gb`, `de`).
    ///
    /// Absent data or any failure yields an empty list.
    pub async fn popular_songs(&self, region: &str) -> Vec<Track> {
        match self.fetch_trending(region).await {
            Ok(records) => records.into_iter().map(Track::from).collect(),
            Err(err) => {
                warn!(region, error = %err, "trending lookup failed");
                Vec::new()
            }
        }
    }

    /// A starter selection: one lookup per entry of the fixed internal
    /// catalog, all issued concurrently.
    ///
    /// Each lookup is failure-isolated; a failing request contributes an
    /// empty list rather than discarding the batch. The combined result
    /// keeps catalog order.
    pub async fn example_songs(&self) -> Vec<Track> {
        let lookups = EXAMPLE_CATALOG
            .iter()
            .flat_map(|(artist, titles)| titles.iter().map(move |title| (*artist, *title)));

        let results = future::join_all(lookups.map(|(artist, title)| async move {
            match self.fetch_lookup(artist, title).await {
                Ok(records) => records,
                Err(err) => {
                    warn!(artist, title, error = %err, "example lookup failed");
                    Vec::new()
                }
            }
        }))
        .await;

        results.into_iter().flatten().map(Track::from).collect()
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<SearchedTrack>> {
        let url = format!(
            "{}/mostloved.php?format={}",
            self.root,
            urlencoding::encode(query)
        );
        debug!(url = %url, "searching tracks");

        let body: TrackListResponse<SearchedTrack> = self.get_json(&url, "search").await?;
        Ok(body.track.unwrap_or_default())
    }

    async fn fetch_trending(&self, region: &str) -> Result<Vec<TrendingTrack>> {
        let url = format!(
            "{}/trending.php?country={}&type=itunes&format=singles",
            self.root,
            urlencoding::encode(region)
        );
        debug!(url = %url, "fetching trending singles");

        let body: TrendingResponse = self.get_json(&url, "trending").await?;
        Ok(body.trending.unwrap_or_default())
    }

    async fn fetch_lookup(&self, artist: &str, title: &str) -> Result<Vec<TrendingTrack>> {
        let url = format!(
            "{}/searchtrack.php?s={}&t={}",
            self.root,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );
        debug!(url = %url, "looking up track");

        let body: TrackListResponse<TrendingTrack> = self.get_json(&url, "lookup").await?;
        Ok(body.track.unwrap_or_default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> Result<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| {
            CatalogError::Parse(format!("failed to parse {what} response: {e}"))
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_BASE_URL;

    #[test]
    fn url_validation() {
        assert!(AudioDbClient::new(CatalogConfig::new("https://example.com")).is_ok());
        assert!(AudioDbClient::new(CatalogConfig::new("http://localhost:8080")).is_ok());

        assert!(AudioDbClient::new(CatalogConfig::new("")).is_err());
        assert!(AudioDbClient::new(CatalogConfig::new("not-a-url")).is_err());
        assert!(AudioDbClient::new(CatalogConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn endpoint_root_composition() {
        let client = AudioDbClient::new(CatalogConfig::with_api_key(
            "https://example.com///",
            "abc",
        ))
        .expect("valid url");
        assert_eq!(client.endpoint_root(), "https://example.com/api/v1/json/abc");
    }

    #[test]
    fn default_config_targets_the_public_test_key() {
        let client = AudioDbClient::new(CatalogConfig::default()).expect("valid url");
        assert_eq!(
            client.endpoint_root(),
            format!("{DEFAULT_BASE_URL}/api/v1/json/123")
        );
    }
}
