//! Domain types for MusicHub.

mod ids;
mod playlist;
mod session;
mod track;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use session::SessionUser;
pub use track::Track;
