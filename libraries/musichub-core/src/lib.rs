//! MusicHub Core
//!
//! Domain types, error handling, and the persistence port shared by the
//! MusicHub crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `SessionUser` and their ID newtypes
//! - **Persistence Port**: the `StateStorage` trait and its well-known keys
//! - **Error Handling**: unified `HubError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use musichub_core::types::{Playlist, SessionUser, Track, TrackId};
//!
//! // A user signs in
//! let user = SessionUser::new("alice@example.com");
//!
//! // and collects tracks into a playlist
//! let track = Track::new(TrackId::new("32795237"), "Yellow", "Coldplay");
//! let playlist = Playlist::new(user.id.clone(), "Road Trip", vec![track]);
//! assert_eq!(playlist.tracks.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{HubError, Result};
pub use storage::StateStorage;
pub use types::{Playlist, PlaylistId, SessionUser, Track, TrackId, UserId};
