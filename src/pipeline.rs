use std::{
    collections::{HashMap, HashSet},
    future::Future,
    sync::Arc,
    time::Duration,
};

use futures::stream::{StreamExt, TryStreamExt, iter};
use log::{debug, info, warn};

use crate::clients::{
    Catalog, MAX_ARTIST_BATCH,
    entities::{Artist, CatalogArtist, CatalogTrack, Track},
    errors::{Error, Result},
};

/// Bounded exponential backoff for transient catalog failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per catalog call, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry, doubled for every further one
    pub base_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Configuration for the Pipeline struct
#[derive(Debug, Clone)]
pub struct Config {
    /// Artist ids per lookup call, at most 50
    pub batch_size: usize,
    /// Artist lookups in flight at once
    pub concurrency: usize,
    /// Backoff for transient catalog failures
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

/// Builds a [`Config`], filling unset values with defaults
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    batch_size: Option<usize>,
    concurrency: Option<usize>,
    retry: Option<RetryPolicy>,
}

impl ConfigBuilder {
    /// Builder with every setting left at its default
    pub fn new() -> Self {
        Self {
            batch_size: None,  // Artists per lookup call, capped by the catalog limit of 50.
            concurrency: None, // Artist lookups in flight at once. Default is 4.
            retry: None,
        }
    }

    /// Artist ids per lookup call, clamped to `1..=50`
    #[must_use]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Artist lookups in flight at once, at least 1
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Backoff for transient catalog failures
    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Config {
        Config {
            batch_size: self
                .batch_size
                .unwrap_or(MAX_ARTIST_BATCH)
                .clamp(1, MAX_ARTIST_BATCH),
            concurrency: self.concurrency.unwrap_or(4).max(1),
            retry: self.retry.unwrap_or_default(),
        }
    }
}

/// Turns a playlist id into tracks enriched with full artist details
pub struct Pipeline<C> {
    catalog: C,
    config: Config,
}

impl<C: Catalog> Pipeline<C> {
    /// Pipeline reading from `catalog`
    pub fn new(catalog: C, config: Config) -> Self {
        Pipeline { catalog, config }
    }

    /// The catalog this pipeline reads from
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Fetch a playlist and join artist details onto its tracks.
    ///
    /// Tracks come back in playlist order; entries without a track payload are
    /// skipped and artist ids the catalog could not resolve are dropped from
    /// their track. Any catalog failure aborts the whole call.
    pub async fn fetch_enriched_tracks(&self, playlist_id: &str) -> Result<Vec<Track>> {
        if playlist_id.trim().is_empty() {
            return Err(Error::PlaylistNotFound(playlist_id.to_owned()));
        }

        info!("Fetching playlist {playlist_id} ...");
        let entries = self
            .with_retry(move || self.catalog.playlist_entries(playlist_id))
            .await?;

        let tracks: Vec<CatalogTrack> = entries.into_iter().filter_map(|e| e.track).collect();
        if tracks.is_empty() {
            info!("Playlist {playlist_id} has no tracks");
            return Ok(Vec::new());
        }

        let artist_ids = distinct_artist_ids(&tracks);
        debug!(
            "Playlist {playlist_id}: {} tracks referencing {} distinct artists",
            tracks.len(),
            artist_ids.len()
        );
        let artists = self.resolve_artists(&artist_ids).await?;

        let tracks: Vec<Track> = tracks
            .into_iter()
            .map(|t| build_track(t, &artists))
            .collect();
        info!("Enriched {} tracks of playlist {playlist_id}", tracks.len());
        Ok(tracks)
    }

    // Look up artists in batches, several batches in flight at once.
    // The first failing batch aborts the lookup.
    async fn resolve_artists(&self, artist_ids: &[String]) -> Result<HashMap<String, Arc<Artist>>> {
        let batches: Vec<Vec<String>> = artist_ids
            .chunks(self.config.batch_size)
            .map(<[String]>::to_vec)
            .collect();
        debug!("Looking up artists in {} batches", batches.len());

        let results: Vec<Vec<CatalogArtist>> = iter(batches)
            .map(|batch| async move { self.with_retry(|| self.catalog.artists(&batch)).await })
            .buffer_unordered(self.config.concurrency)
            .try_collect()
            .await?;

        Ok(results
            .into_iter()
            .flatten()
            .map(|a| (a.id.clone(), Arc::new(Artist::from(a))))
            .collect())
    }

    async fn with_retry<T, F, Fut>(&self, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let policy = self.config.retry;
        let mut attempt = 1;
        loop {
            match call().await {
                Err(err) if err.is_transient() && attempt < policy.max_attempts => {
                    let delay = policy.delay_for(attempt);
                    warn!("Catalog call failed ({err}), retry {attempt} in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

// Distinct artist ids in first-seen order, so batches are reproducible
fn distinct_artist_ids(tracks: &[CatalogTrack]) -> Vec<String> {
    let mut seen = HashSet::new();
    tracks
        .iter()
        .flat_map(CatalogTrack::artist_ids)
        .filter(|id| seen.insert(*id))
        .map(str::to_owned)
        .collect()
}

fn build_track(track: CatalogTrack, artists: &HashMap<String, Arc<Artist>>) -> Track {
    let resolved = track
        .artist_ids()
        .filter_map(|id| match artists.get(id) {
            Some(artist) => Some(Arc::clone(artist)),
            None => {
                debug!("Artist {id} of track {:?} not in catalog, dropping it", track.name);
                None
            }
        })
        .collect();

    Track {
        id: track.id.unwrap_or_default(),
        name: track.name,
        artists: resolved,
        popularity: track.popularity.unwrap_or(0),
        duration_ms: track.duration_ms.unwrap_or(0),
    }
}
