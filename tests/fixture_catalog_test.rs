use playlist_stats::{
    clients::{Catalog, FixtureCatalog, errors::Error},
    features::build_feature_table,
    pipeline::{ConfigBuilder, Pipeline},
    stats,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

async fn pipeline() -> Pipeline<FixtureCatalog> {
    let catalog = FixtureCatalog::load(FIXTURE).await.unwrap();
    Pipeline::new(catalog, ConfigBuilder::new().build())
}

#[tokio::test]
async fn test_two_track_playlist_end_to_end() {
    let tracks = pipeline().await.fetch_enriched_tracks("two-tracks").await.unwrap();

    // the null entry is skipped
    let names: Vec<_> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Track A", "Track B"]);

    assert_eq!(stats::most_popular_track(&tracks).unwrap().id, "track-b");
    assert_eq!(stats::popularity_range(&tracks).unwrap(), (80, 95));
    let (artist, count) = stats::artist_with_most_tracks(&tracks).unwrap();
    assert_eq!(artist.id, "artist-x");
    assert_eq!(count, 2);

    let rows = build_feature_table(&tracks);
    assert!(rows[0].is_pop && !rows[0].is_rap);
    assert!(rows[1].is_pop && rows[1].is_rap);
    assert_eq!(rows[1].artist_names, ["Artist X", "Artist Y"]);
}

#[tokio::test]
async fn test_unresolved_artists_and_missing_numbers() {
    let tracks = pipeline().await.fetch_enriched_tracks("with-gaps").await.unwrap();

    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    let ids: Vec<_> = track.artists.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["artist-y"]);
    assert_eq!(track.popularity, 0);
    assert_eq!(track.duration_ms, 0);
}

#[tokio::test]
async fn test_empty_playlist_is_not_an_error() {
    let tracks = pipeline().await.fetch_enriched_tracks("empty").await.unwrap();

    assert!(tracks.is_empty());
    assert!(build_feature_table(&tracks).is_empty());
    assert!(matches!(stats::popularity_range(&tracks), Err(Error::EmptyInput(_))));
}

#[tokio::test]
async fn test_unknown_playlist_is_not_found() {
    let result = pipeline().await.fetch_enriched_tracks("nope").await;
    assert!(matches!(result, Err(Error::PlaylistNotFound(id)) if id == "nope"));
}

#[tokio::test]
async fn test_oversized_artist_lookup_is_rejected() {
    let catalog = FixtureCatalog::from_json("{}").unwrap();
    let ids: Vec<String> = (0..51).map(|i| format!("artist-{i}")).collect();
    assert!(matches!(catalog.artists(&ids).await, Err(Error::BatchTooLarge(51))));
}

#[test]
fn test_malformed_snapshot_fails_to_load() {
    let result = FixtureCatalog::from_json("{\"playlists\": 3}");
    assert!(matches!(result, Err(Error::Json(_))));
}
