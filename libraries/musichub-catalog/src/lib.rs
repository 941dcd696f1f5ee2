//! MusicHub Catalog
//!
//! HTTP gateway to the TheAudioDB metadata API.
//!
//! The gateway adapts the API's heterogeneous response shapes into the
//! internal [`Track`](musichub_core::types::Track) representation and
//! never lets a failure cross its boundary: transport and parse errors
//! are logged and reported as empty result lists.
//!
//! # Example
//!
//! ```ignore
//! use musichub_catalog::{AudioDbClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AudioDbClient::new(CatalogConfig::default()).unwrap();
//!
//!     let results = client.search_track("yellow").await;
//!     println!("{} tracks found", results.len());
//!
//!     let trending = client.popular_songs("us").await;
//!     println!("{} trending in the US", trending.len());
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::AudioDbClient;
pub use error::{CatalogError, Result};
pub use types::{CatalogConfig, SearchedTrack, TrendingTrack};
