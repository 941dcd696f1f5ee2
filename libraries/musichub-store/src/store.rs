//! The facade composing the three state slices.

use crate::catalog::CatalogCache;
use crate::playlists::PlaylistStore;
use crate::session::SessionStore;
use musichub_core::storage::StateStorage;
use std::sync::Arc;

/// The single handle the view layer threads through.
///
/// The slices stay independent; this struct only ties their lifetimes
/// together and wires each durable slice to its storage. Session state
/// and playlists may live on different backends (short-lived vs durable).
pub struct AppStore {
    /// Authenticated identity
    pub session: SessionStore,
    /// Last-fetched catalog results
    pub catalog: CatalogCache,
    /// User playlists
    pub playlists: PlaylistStore,
}

impl AppStore {
    /// Create a store with fresh (empty) state.
    pub fn new(
        session_storage: Arc<dyn StateStorage>,
        durable_storage: Arc<dyn StateStorage>,
    ) -> Self {
        Self {
            session: SessionStore::new(session_storage),
            catalog: CatalogCache::new(),
            playlists: PlaylistStore::new(durable_storage),
        }
    }

    /// Startup constructor: restore the session and reload playlists.
    ///
    /// Corrupt persisted state is discarded (see the slice constructors);
    /// the catalog cache always starts empty.
    pub fn restore(
        session_storage: Arc<dyn StateStorage>,
        durable_storage: Arc<dyn StateStorage>,
    ) -> Self {
        Self {
            session: SessionStore::restore(session_storage),
            catalog: CatalogCache::new(),
            playlists: PlaylistStore::load(durable_storage),
        }
    }
}
