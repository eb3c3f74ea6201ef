//! Playlist stats - enrich playlist tracks with artist genres and summarize them
//!
//! This library fetches a Spotify playlist, joins each track with the genres of
//! its artists and derives a feature table and headline statistics from it.

/// HTTP endpoint serving playlist statistics
pub mod api;
/// Client modules for the music catalog
pub mod clients;
/// Per-track feature table with genre flags
pub mod features;
/// Playlist-to-tracks enrichment pipeline
pub mod pipeline;
/// Aggregate statistics over enriched tracks
pub mod stats;
