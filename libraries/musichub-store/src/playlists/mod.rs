//! Playlists slice: the durable collection of user-owned playlists.
//!
//! The collection holds ALL users' playlists together; callers filter by
//! owner with [`PlaylistStore::playlists_for`] before display. Every
//! successful mutation writes the entire collection back through the
//! storage port as one JSON array, so the persisted copy is always a
//! consistent snapshot and a restart reloads exactly this list.

use musichub_core::error::Result;
use musichub_core::storage::{StateStorage, KEY_PLAYLISTS};
use musichub_core::types::{Playlist, PlaylistId, Track, TrackId, UserId};
use std::sync::Arc;
use tracing::warn;

/// Fields the caller supplies when creating a playlist; id and creation
/// timestamp are generated by the store.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    /// Display name
    pub name: String,
    /// Owning user
    pub user_id: UserId,
    /// Initial track sequence
    pub tracks: Vec<Track>,
}

/// Durable, multi-tenant playlist collection with write-through
/// persistence.
pub struct PlaylistStore {
    storage: Arc<dyn StateStorage>,
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store over the given durable storage.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            storage,
            playlists: Vec::new(),
        }
    }

    /// Startup constructor: reload the persisted collection.
    ///
    /// A malformed or unreadable entry starts the store empty; the next
    /// successful mutation overwrites it wholesale.
    pub fn load(storage: Arc<dyn StateStorage>) -> Self {
        let mut store = Self::new(storage);

        let raw = match store.storage.load(KEY_PLAYLISTS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return store,
            Err(err) => {
                warn!(error = %err, "could not read persisted playlists");
                return store;
            }
        };

        match serde_json::from_str::<Vec<Playlist>>(&raw) {
            Ok(playlists) => store.playlists = playlists,
            Err(err) => {
                warn!(error = %err, "discarding malformed persisted playlists");
            }
        }

        store
    }

    /// All playlists, every owner included.
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// The playlists owned by one user, in collection order.
    pub fn playlists_for<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> impl Iterator<Item = &'a Playlist> {
        self.playlists.iter().filter(move |p| &p.user_id == user_id)
    }

    /// Look up a playlist by id.
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Create a playlist with a fresh id and creation timestamp, append
    /// it, and persist. Returns the generated id.
    ///
    /// The store trusts its caller: an empty name is accepted here and
    /// rejected, if at all, by the layer collecting user input.
    pub fn add_playlist(&mut self, new: NewPlaylist) -> Result<PlaylistId> {
        let playlist = Playlist::new(new.user_id, new.name, new.tracks);
        let id = playlist.id.clone();
        self.playlists.push(playlist);
        self.persist()?;
        Ok(id)
    }

    /// Replace the stored playlist with a matching id, preserving its
    /// position in the collection. Returns whether a replacement happened.
    pub fn update_playlist(&mut self, playlist: Playlist) -> Result<bool> {
        let Some(slot) = self.playlists.iter_mut().find(|p| p.id == playlist.id) else {
            return Ok(false);
        };
        *slot = playlist;
        self.persist()?;
        Ok(true)
    }

    /// Remove the playlist with the given id. Returns whether anything
    /// was removed.
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> Result<bool> {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        if self.playlists.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Append a track to the target playlist unless a track with the same
    /// id is already present (idempotent no-op, first insertion wins).
    /// Returns whether the track was appended.
    pub fn add_track(&mut self, playlist_id: &PlaylistId, track: Track) -> Result<bool> {
        let Some(playlist) = self.playlists.iter_mut().find(|p| &p.id == playlist_id) else {
            return Ok(false);
        };
        if !playlist.add_track(track) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove all tracks with the given id from the target playlist.
    /// Returns whether anything was removed.
    pub fn remove_track(
        &mut self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<bool> {
        let Some(playlist) = self.playlists.iter_mut().find(|p| &p.id == playlist_id) else {
            return Ok(false);
        };
        if !playlist.remove_track(track_id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.playlists)?;
        self.storage.save(KEY_PLAYLISTS, &serialized)
    }
}
