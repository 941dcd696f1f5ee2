//! MusicHub Store
//!
//! State containers for the MusicHub client, composed of three
//! independent slices plus the persistence backends behind them.
//!
//! # Architecture
//!
//! - **Slice Isolation**: session, catalog, and playlists are separate
//!   containers; only the facade ties them together
//! - **Write-Through**: the durable slices persist their whole state
//!   after every successful mutation
//! - **Ports over Mechanisms**: persistence goes through the
//!   `StateStorage` trait, so backends are swappable
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use musichub_store::{AppStore, MemoryStorage};
//! use musichub_core::types::SessionUser;
//!
//! # fn example() -> musichub_core::Result<()> {
//! let session_storage = Arc::new(MemoryStorage::new());
//! let durable_storage = Arc::new(MemoryStorage::new());
//! let mut store = AppStore::new(session_storage, durable_storage);
//!
//! store.session.login(SessionUser::new("alice@example.com"))?;
//! assert!(store.session.is_authenticated());
//! # Ok(())
//! # }
//! ```

mod backend;
mod store;

// Vertical slices
pub mod catalog;
pub mod playlists;
pub mod session;

pub use backend::{FileStorage, MemoryStorage};
pub use catalog::CatalogCache;
pub use playlists::{NewPlaylist, PlaylistStore};
pub use session::SessionStore;
pub use store::AppStore;
