/// Catalog abstraction the pipeline reads from
pub mod catalog;
/// Artist and track entities plus catalog response schemas
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Catalog backed by a local JSON snapshot
pub mod fixture;
/// Spotify Web API client
pub mod spotify;

pub use catalog::{Catalog, MAX_ARTIST_BATCH};
pub use fixture::FixtureCatalog;
pub use spotify::SpotifyClient;
