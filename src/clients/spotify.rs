use log::debug;

use crate::clients::{
    catalog::{Catalog, MAX_ARTIST_BATCH},
    entities::{ArtistRef, CatalogArtist, CatalogTrack, PlaylistEntry},
    errors::{Error, Result, http_status},
};
use futures::stream::TryStreamExt;
use rspotify::{
    ClientCredsSpotify, Config, Credentials,
    model::{ArtistId, FullArtist, FullTrack, PlayableItem, PlaylistId, PlaylistItem},
    prelude::*,
};

impl From<FullTrack> for CatalogTrack {
    fn from(t: FullTrack) -> CatalogTrack {
        CatalogTrack {
            // local files have no catalog id
            id: t.id.map(|id| id.id().to_owned()),
            name: t.name,
            artists: t
                .artists
                .into_iter()
                .map(|a| ArtistRef {
                    id: a.id.map(|id| id.id().to_owned()),
                })
                .collect(),
            popularity: Some(t.popularity),
            duration_ms: u64::try_from(t.duration.num_milliseconds()).ok(),
        }
    }
}

impl From<PlaylistItem> for PlaylistEntry {
    fn from(item: PlaylistItem) -> PlaylistEntry {
        let track = match item.track {
            Some(PlayableItem::Track(track)) => Some(track.into()),
            _ => None,
        };
        PlaylistEntry { track }
    }
}

impl From<FullArtist> for CatalogArtist {
    fn from(a: FullArtist) -> CatalogArtist {
        CatalogArtist {
            id: a.id.id().to_owned(),
            name: a.name,
            genres: a.genres,
        }
    }
}

/// Catalog backed by the Spotify Web API
pub struct SpotifyClient {
    /// Authorized rspotify client
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    /// Wrap an already authorized client
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    /// Create a `SpotifyClient` from environment variables and request an app token
    pub async fn connect() -> Result<Self> {
        let creds = Credentials::from_env()
            .or_else(Self::credentials_from_legacy_env)
            .ok_or_else(|| {
                Error::ConfigurationError(
                    "Missing Spotify credentials. Set RSPOTIFY_CLIENT_ID and RSPOTIFY_CLIENT_SECRET."
                        .into(),
                )
            })?;

        let spotify = ClientCredsSpotify::with_config(
            creds,
            Config {
                token_refreshing: true,
                ..Default::default()
            },
        );

        debug!("Requesting Spotify client credentials token ...");
        spotify.request_token().await?;
        Ok(Self { spotify })
    }

    fn credentials_from_legacy_env() -> Option<Credentials> {
        let id = std::env::var("SPOTIFY_CLIENT_ID").ok()?;
        let secret = std::env::var("SPOTIFY_CLIENT_SECRET").ok()?;
        Some(Credentials::new(&id, &secret))
    }
}

impl Catalog for SpotifyClient {
    async fn playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        let id = PlaylistId::from_id(playlist_id)
            .map_err(|_| Error::PlaylistNotFound(playlist_id.to_owned()))?;

        let stream = self.spotify.playlist_items(id, None, None);
        let entries: Vec<PlaylistEntry> = stream
            .map_ok(PlaylistEntry::from)
            .try_collect()
            .await
            .map_err(|err| match http_status(&err) {
                Some(404) => Error::PlaylistNotFound(playlist_id.to_owned()),
                _ => Error::from(err),
            })?;

        debug!("Fetched {} entries of playlist {playlist_id}", entries.len());
        Ok(entries)
    }

    async fn artists(&self, artist_ids: &[String]) -> Result<Vec<CatalogArtist>> {
        if artist_ids.len() > MAX_ARTIST_BATCH {
            return Err(Error::BatchTooLarge(artist_ids.len()));
        }

        let ids: Vec<ArtistId<'static>> = artist_ids
            .iter()
            .filter_map(|id| match ArtistId::from_id(id.clone()) {
                Ok(id) => Some(id),
                Err(err) => {
                    debug!("Skipping malformed artist id {id:?}: {err}");
                    None
                }
            })
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let artists = self.spotify.artists(ids).await?;
        Ok(artists.into_iter().map(CatalogArtist::from).collect())
    }
}
