/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, user-owned ordered collection of tracks.
///
/// Insertion order is preserved and duplicate track ids are forbidden;
/// the first insertion of an id wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner user ID
    pub user_id: UserId,

    /// Ordered track sequence
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist with a freshly generated id
    pub fn new(user_id: UserId, name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            user_id,
            tracks,
            created_at: Utc::now(),
        }
    }

    /// Whether a track with the given id is already in the sequence
    pub fn contains_track(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Append a track unless its id is already present.
    ///
    /// Returns whether the track was appended. On a duplicate id the
    /// existing entry keeps its fields.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.contains_track(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove every track with the given id.
    ///
    /// Returns whether anything was removed.
    pub fn remove_track(&mut self, track_id: &TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != track_id);
        self.tracks.len() != before
    }
}
