use std::{collections::HashMap, path::Path};

use log::debug;
use serde::Deserialize;

use crate::clients::{
    catalog::{Catalog, MAX_ARTIST_BATCH},
    entities::{CatalogArtist, PlaylistEntry},
    errors::{Error, Result},
};

// On-disk layout of a catalog snapshot
#[derive(Deserialize, Debug, Default)]
struct Snapshot {
    #[serde(default)]
    playlists: HashMap<String, Vec<PlaylistEntry>>,
    #[serde(default)]
    artists: Vec<CatalogArtist>,
}

/// Catalog served from a JSON snapshot instead of the network.
///
/// Useful for offline runs. It honours the same contract as the Spotify
/// catalog: unknown playlists are `PlaylistNotFound`, unknown artist ids are
/// left out of lookups and lookups over 50 ids are rejected.
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    playlists: HashMap<String, Vec<PlaylistEntry>>,
    artists: HashMap<String, CatalogArtist>,
}

impl FixtureCatalog {
    /// Parse a snapshot document
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self {
            playlists: snapshot.playlists,
            artists: snapshot
                .artists
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
        })
    }

    /// Read and parse a snapshot file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&contents)?;
        debug!(
            "Loaded catalog snapshot from {path:?}: {} playlists, {} artists",
            catalog.playlists.len(),
            catalog.artists.len()
        );
        Ok(catalog)
    }
}

impl Catalog for FixtureCatalog {
    async fn playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        self.playlists
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| Error::PlaylistNotFound(playlist_id.to_owned()))
    }

    async fn artists(&self, artist_ids: &[String]) -> Result<Vec<CatalogArtist>> {
        if artist_ids.len() > MAX_ARTIST_BATCH {
            return Err(Error::BatchTooLarge(artist_ids.len()));
        }
        Ok(artist_ids
            .iter()
            .filter_map(|id| self.artists.get(id).cloned())
            .collect())
    }
}
