/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// One playable song as surfaced by the catalog.
///
/// Different catalog endpoints populate different subsets of the metadata:
/// plain search results carry no album or source type, trending results no
/// genre or release year. Everything beyond id/name/artist is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog track identifier
    pub id: TrackId,

    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Source-type tag (e.g. "single")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Track {
    /// Create a track with the required fields only
    pub fn new(id: TrackId, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artist: artist.into(),
            album: None,
            genre: None,
            year: None,
            thumbnail: None,
            kind: None,
        }
    }
}
