use std::future::Future;

use crate::clients::{
    entities::{CatalogArtist, PlaylistEntry},
    errors::Result,
};

/// Maximum number of artist ids the catalog accepts in a single lookup
pub const MAX_ARTIST_BATCH: usize = 50;

/// Source of playlist and artist records.
///
/// Implementations translate their wire format into the typed catalog
/// schemas and classify failures into [`crate::clients::errors::Error`]:
/// an unknown playlist must surface as `PlaylistNotFound`, transport and
/// authorization failures as `CatalogUnavailable`.
pub trait Catalog: Send + Sync {
    /// Raw entries of a playlist in playlist order
    fn playlist_entries(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<Vec<PlaylistEntry>>> + Send;

    /// Details for at most [`MAX_ARTIST_BATCH`] artists. Ids the catalog does
    /// not know are simply missing from the result.
    fn artists(
        &self,
        artist_ids: &[String],
    ) -> impl Future<Output = Result<Vec<CatalogArtist>>> + Send;
}
