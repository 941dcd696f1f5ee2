//! Persistence port for MusicHub state.
//!
//! Durable state is stored as JSON strings under well-known keys. The
//! stores call the port after each successful mutation, so the mechanism
//! behind it (files, an embedded database, a remote service) is swappable
//! without touching store logic.

use crate::error::Result;

/// Key under which the active identity is persisted (session-scoped).
pub const KEY_USER: &str = "user";

/// Key under which the last login timestamp is persisted (session-scoped).
pub const KEY_LAST_LOGIN: &str = "lastLogin";

/// Key under which the playlist collection is persisted (durable).
pub const KEY_PLAYLISTS: &str = "playlists";

/// Keyed storage for serialized state.
///
/// Implementations hold one JSON string per key. `load` of an absent key
/// is `Ok(None)`, and `remove` of an absent key is a no-op.
pub trait StateStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`.
    fn remove(&self, key: &str) -> Result<()>;
}
