use std::sync::Arc;

use playlist_stats::clients::entities::{Artist, Track};

pub fn artist(id: &str, genres: &[&str]) -> Arc<Artist> {
    Arc::new(Artist {
        id: id.to_owned(),
        name: format!("Artist {id}"),
        genres: genres.iter().map(|g| (*g).to_owned()).collect(),
    })
}

pub fn track(id: &str, popularity: u32, artists: &[&Arc<Artist>]) -> Track {
    Track {
        id: id.to_owned(),
        name: format!("Track {id}"),
        artists: artists.iter().map(|a| Arc::clone(a)).collect(),
        popularity,
        duration_ms: 180_000,
    }
}
