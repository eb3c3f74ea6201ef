//! Tabular features derived from enriched tracks.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::clients::entities::Track;

/// One row of the feature table, one per track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    /// Catalog id of the track
    pub track_id: String,
    /// Display name of the track
    pub track_name: String,
    /// Artist ids in listed order
    pub artist_ids: Vec<String>,
    /// Artist names, parallel to `artist_ids`
    pub artist_names: Vec<String>,
    /// Union of the artists' genres
    pub genres: BTreeSet<String>,
    /// Catalog popularity, 0 to 100
    pub popularity: u32,
    /// Length in milliseconds
    pub duration_ms: u64,
    /// Any genre mentions "pop"
    pub is_pop: bool,
    /// Any genre mentions "rap"
    pub is_rap: bool,
    /// Any genre mentions "dance"
    pub is_dance: bool,
    /// Any genre mentions "country"
    pub is_country: bool,
}

impl FeatureRow {
    /// Derive the row of one track
    pub fn from_track(track: &Track) -> Self {
        let genres = track_genres(track);
        Self {
            track_id: track.id.clone(),
            track_name: track.name.clone(),
            artist_ids: track.artists.iter().map(|a| a.id.clone()).collect(),
            artist_names: track.artists.iter().map(|a| a.name.clone()).collect(),
            is_pop: genres_contain(&genres, "pop"),
            is_rap: genres_contain(&genres, "rap"),
            is_dance: genres_contain(&genres, "dance"),
            is_country: genres_contain(&genres, "country"),
            genres,
            popularity: track.popularity,
            duration_ms: track.duration_ms,
        }
    }

    /// Track length in minutes, the x axis of the popularity scatter plot
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_min(&self) -> f64 {
        self.duration_ms as f64 / 60_000.0
    }
}

/// One row per track, in track order
pub fn build_feature_table(tracks: &[Track]) -> Vec<FeatureRow> {
    tracks.iter().map(FeatureRow::from_track).collect()
}

/// Union of the genres of all artists on the track, as stored by the catalog
pub fn track_genres(track: &Track) -> BTreeSet<String> {
    track
        .artists
        .iter()
        .flat_map(|a| a.genres.iter().cloned())
        .collect()
}

/// Whether any of the track's genres contains `keyword`, ignoring case
pub fn genre_contains(track: &Track, keyword: &str) -> bool {
    genres_contain(&track_genres(track), keyword)
}

fn genres_contain(genres: &BTreeSet<String>, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    genres.iter().any(|g| g.to_lowercase().contains(&keyword))
}
