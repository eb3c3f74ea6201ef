use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Artist with the details looked up from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Genre tags in catalog order, possibly empty
    pub genres: Vec<String>,
}

/// Playlist track joined with its resolved artists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Catalog id, empty for local files
    pub id: String,
    /// Display name
    pub name: String,
    /// Resolved artists in listed order; the same artist is shared by every
    /// track it appears on
    pub artists: Vec<Arc<Artist>>,
    /// Catalog popularity, 0 to 100
    pub popularity: u32,
    /// Length in milliseconds
    pub duration_ms: u64,
}

// Catalog response schemas. Everything the catalog may omit is optional or
// defaulted here, so the pipeline only ever sees well-formed records.

/// One slot of a playlist. `track` is `None` for removed tracks or
/// non-track items such as podcast episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Track payload, if the slot holds a track
    #[serde(default)]
    pub track: Option<CatalogTrack>,
}

/// Track as the catalog returns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// Catalog id, absent for local files
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Artist references in listed order
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    /// Popularity, 0 to 100
    #[serde(default)]
    pub popularity: Option<u32>,
    /// Length in milliseconds
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Artist as referenced from a track, before its details are looked up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// Catalog id of the artist
    #[serde(default)]
    pub id: Option<String>,
}

/// Artist details as returned by an artist lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArtist {
    /// Catalog id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Genre tags
    #[serde(default)]
    pub genres: Vec<String>,
}

impl From<CatalogArtist> for Artist {
    fn from(a: CatalogArtist) -> Artist {
        Artist {
            id: a.id,
            name: a.name,
            genres: a.genres,
        }
    }
}

impl CatalogTrack {
    /// Referenced artist ids in listed order, skipping references without an id
    pub fn artist_ids(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().filter_map(|a| a.id.as_deref())
    }
}
