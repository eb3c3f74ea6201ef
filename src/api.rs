//! HTTP surface: playlist statistics as JSON.
//!
//! `GET /playlist?playlist_id=<id>` runs the enrichment pipeline and answers
//! with a [`PlaylistSummary`]. `GET /health` reports liveness.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::{
    clients::{
        Catalog,
        entities::Track,
        errors::{Error, Result},
    },
    pipeline::Pipeline,
    stats,
};

/// Public playlist used when the request names none (Billboard Hot 100)
pub const DEFAULT_PLAYLIST_ID: &str = "6UeSakyzhiEt4NB3UAd6NQ";

/// Query string of `GET /playlist`
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistQuery {
    /// Playlist to summarize
    pub playlist_id: Option<String>,
}

impl PlaylistQuery {
    /// Requested playlist id; absent or blank falls back to the default playlist
    pub fn playlist_id(&self) -> &str {
        self.playlist_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_PLAYLIST_ID)
    }
}

/// Entry of the summary's track list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackName {
    /// Display name of the track
    pub track_name: String,
}

/// Statistics of one playlist. The statistic fields are `None` for a
/// playlist without tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    /// Number of tracks on the playlist
    pub track_count: usize,
    /// Name of the most popular track
    pub most_popular_track: Option<String>,
    /// Same as `most_tracks_artist`
    pub most_popular_artist: Option<String>,
    /// Name of the artist on the most tracks
    pub most_tracks_artist: Option<String>,
    /// Lowest and highest track popularity
    pub track_popularity_range: Option<(u32, u32)>,
    /// Track names in playlist order
    pub tracks: Vec<TrackName>,
}

impl PlaylistSummary {
    /// Summarize enriched tracks
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let most_tracks_artist = stats::artist_with_most_tracks(tracks)
            .ok()
            .map(|(artist, _)| artist.name.clone());

        PlaylistSummary {
            track_count: tracks.len(),
            most_popular_track: stats::most_popular_track(tracks)
                .ok()
                .map(|t| t.name.clone()),
            // the artist on the most tracks doubles as the most popular one
            most_popular_artist: most_tracks_artist.clone(),
            most_tracks_artist,
            track_popularity_range: stats::popularity_range(tracks).ok(),
            tracks: tracks
                .iter()
                .map(|t| TrackName {
                    track_name: t.name.clone(),
                })
                .collect(),
        }
    }
}

/// Routes `/playlist` and `/health` over the given pipeline, open to any origin
pub fn router<C: Catalog + 'static>(pipeline: Arc<Pipeline<C>>) -> Router {
    Router::new()
        .route("/playlist", get(playlist::<C>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(pipeline)
}

async fn playlist<C: Catalog>(
    State(pipeline): State<Arc<Pipeline<C>>>,
    Query(query): Query<PlaylistQuery>,
) -> Result<Json<PlaylistSummary>> {
    let playlist_id = query.playlist_id();
    let tracks = pipeline.fetch_enriched_tracks(playlist_id).await?;
    let summary = PlaylistSummary::from_tracks(&tracks);
    info!(
        "Served playlist {playlist_id}: {} tracks",
        summary.track_count
    );
    Ok(Json(summary))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

impl Error {
    /// Status code the HTTP layer answers with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::PlaylistNotFound(_) => StatusCode::NOT_FOUND,
            Error::CatalogUnavailable { .. } => StatusCode::BAD_GATEWAY,
            Error::EmptyInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
