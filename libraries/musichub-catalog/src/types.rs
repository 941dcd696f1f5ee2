//! Configuration and wire types for TheAudioDB responses.

use musichub_core::types::{Track, TrackId};
use serde::Deserialize;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://www.theaudiodb.com";

/// The public test key TheAudioDB hands out for development use.
pub const DEFAULT_API_KEY: &str = "123";

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API host (e.g. `https://www.theaudiodb.com`)
    pub base_url: String,
    /// API key segment of the endpoint path
    pub api_key: String,
}

impl CatalogConfig {
    /// Config for a host, using the public test key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }

    /// Config for a host with a specific API key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Response envelopes
// =============================================================================

/// Body of a search or per-track lookup response. An absent `track` field
/// means "no results", not an error.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct TrackListResponse<T> {
    #[serde(default)]
    pub track: Option<Vec<T>>,
}

/// Body of a trending response. An absent `trending` field means "no
/// results", not an error.
#[derive(Debug, Deserialize)]
pub(crate) struct TrendingResponse {
    #[serde(default)]
    pub trending: Option<Vec<TrendingTrack>>,
}

// =============================================================================
// Records
// =============================================================================

/// A track record as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchedTrack {
    /// Track id
    #[serde(rename = "idTrack")]
    pub id: String,
    /// Track title
    #[serde(rename = "strTrack")]
    pub name: String,
    /// Artist name
    #[serde(rename = "strArtist")]
    pub artist: String,
    /// Genre, often absent
    #[serde(rename = "strGenre", default)]
    pub genre: Option<String>,
    /// Release year, often absent
    #[serde(rename = "intYearReleased", default)]
    pub year: Option<String>,
    /// Thumbnail URL, often absent or empty
    #[serde(rename = "strTrackThumb", default)]
    pub thumbnail: Option<String>,
}

/// A track record as returned by the trending and per-track lookup
/// endpoints. These carry album and release-type data but no genre or
/// year.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingTrack {
    /// Track id
    #[serde(rename = "idTrack")]
    pub id: String,
    /// Track title
    #[serde(rename = "strTrack")]
    pub name: String,
    /// Artist name
    #[serde(rename = "strArtist")]
    pub artist: String,
    /// Album name
    #[serde(rename = "strAlbum", default)]
    pub album: Option<String>,
    /// Release type (e.g. "single")
    #[serde(rename = "strType", default)]
    pub kind: Option<String>,
    /// Thumbnail URL, often absent or empty
    #[serde(rename = "strTrackThumb", default)]
    pub thumbnail: Option<String>,
}

// =============================================================================
// Mapping into the domain Track
// =============================================================================

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<SearchedTrack> for Track {
    fn from(record: SearchedTrack) -> Self {
        Self {
            id: TrackId::new(record.id),
            name: record.name,
            artist: record.artist,
            album: None,
            genre: Some(non_empty(record.genre).unwrap_or_else(|| "Unknown".to_string())),
            year: Some(non_empty(record.year).unwrap_or_else(|| "Unknown".to_string())),
            thumbnail: non_empty(record.thumbnail),
            kind: None,
        }
    }
}

impl From<TrendingTrack> for Track {
    fn from(record: TrendingTrack) -> Self {
        Self {
            id: TrackId::new(record.id),
            name: record.name,
            artist: record.artist,
            album: Some(record.album.unwrap_or_default()),
            genre: Some(String::new()),
            year: Some(String::new()),
            thumbnail: non_empty(record.thumbnail),
            kind: Some(record.kind.unwrap_or_default()),
        }
    }
}
