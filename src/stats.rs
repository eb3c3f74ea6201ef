//! Aggregate statistics over a list of enriched tracks.
//!
//! Every function here needs at least one track and reports
//! [`Error::EmptyInput`] otherwise, so callers never see made-up extrema.

use std::{collections::HashMap, sync::Arc};

use crate::clients::{
    entities::{Artist, Track},
    errors::{Error, Result},
};

/// The artist appearing on the most tracks, with that number of tracks.
///
/// An artist listed twice on the same track counts once for it. On a tie the
/// artist seen first wins, scanning tracks in order and each track's artists
/// in listed order.
pub fn artist_with_most_tracks(tracks: &[Track]) -> Result<(Arc<Artist>, usize)> {
    if tracks.is_empty() {
        return Err(Error::EmptyInput("no tracks to count artists on"));
    }

    // id -> (first seen position, artist, track count)
    let mut counts: HashMap<&str, (usize, &Arc<Artist>, usize)> = HashMap::new();
    for track in tracks {
        let mut on_track: Vec<&str> = Vec::with_capacity(track.artists.len());
        for artist in &track.artists {
            if on_track.contains(&artist.id.as_str()) {
                continue;
            }
            on_track.push(&artist.id);
            let next = counts.len();
            counts.entry(&artist.id).or_insert((next, artist, 0)).2 += 1;
        }
    }

    counts
        .into_values()
        .max_by(|(seen_a, _, count_a), (seen_b, _, count_b)| {
            count_a.cmp(count_b).then(seen_b.cmp(seen_a))
        })
        .map(|(_, artist, count)| (Arc::clone(artist), count))
        .ok_or(Error::EmptyInput("no artists on any track"))
}

/// Lowest and highest popularity
pub fn popularity_range(tracks: &[Track]) -> Result<(u32, u32)> {
    let mut popularity = tracks.iter().map(|t| t.popularity);
    let first = popularity
        .next()
        .ok_or(Error::EmptyInput("no tracks for a popularity range"))?;
    Ok(popularity.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
}

/// The most popular track, the earliest one on ties
pub fn most_popular_track(tracks: &[Track]) -> Result<&Track> {
    tracks
        .iter()
        .reduce(|best, t| if t.popularity > best.popularity { t } else { best })
        .ok_or(Error::EmptyInput("no tracks to pick the most popular from"))
}
