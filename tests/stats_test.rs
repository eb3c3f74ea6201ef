mod common;

use common::{artist, track};
use playlist_stats::{
    clients::errors::Error,
    stats::{artist_with_most_tracks, most_popular_track, popularity_range},
};

#[test]
fn test_two_track_scenario() {
    let x = artist("x", &["pop"]);
    let y = artist("y", &["rap"]);
    let tracks = vec![track("a", 80, &[&x]), track("b", 95, &[&x, &y])];

    assert_eq!(most_popular_track(&tracks).unwrap().id, "b");
    assert_eq!(popularity_range(&tracks).unwrap(), (80, 95));
    let (top, count) = artist_with_most_tracks(&tracks).unwrap();
    assert_eq!(top.id, "x");
    assert_eq!(count, 2);
}

#[test]
fn test_tie_goes_to_first_seen_artist() {
    let p = artist("p", &[]);
    let q = artist("q", &[]);
    let r = artist("r", &[]);
    let tracks = vec![
        track("1", 1, &[&r]),
        track("2", 1, &[&q, &p]),
        track("3", 1, &[&p, &q]),
        track("4", 1, &[&q]),
        track("5", 1, &[&p]),
    ];

    for _ in 0..20 {
        let (top, count) = artist_with_most_tracks(&tracks).unwrap();
        assert_eq!(top.id, "q");
        assert_eq!(count, 3);
    }
}

#[test]
fn test_artist_listed_twice_on_a_track_counts_once() {
    let x = artist("x", &[]);
    let y = artist("y", &[]);
    let tracks = vec![track("1", 1, &[&x, &x, &x]), track("2", 1, &[&y]), track("3", 1, &[&y])];

    let (top, count) = artist_with_most_tracks(&tracks).unwrap();
    assert_eq!(top.id, "y");
    assert_eq!(count, 2);
}

#[test]
fn test_most_popular_tie_keeps_first_track() {
    let tracks = vec![track("a", 60, &[]), track("b", 90, &[]), track("c", 90, &[])];
    assert_eq!(most_popular_track(&tracks).unwrap().id, "b");
}

#[test]
fn test_single_track_range() {
    assert_eq!(popularity_range(&[track("a", 42, &[])]).unwrap(), (42, 42));
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(artist_with_most_tracks(&[]), Err(Error::EmptyInput(_))));
    assert!(matches!(popularity_range(&[]), Err(Error::EmptyInput(_))));
    assert!(matches!(most_popular_track(&[]), Err(Error::EmptyInput(_))));
}

#[test]
fn test_tracks_without_artists_have_no_top_artist() {
    let tracks = vec![track("a", 1, &[])];
    assert!(matches!(artist_with_most_tracks(&tracks), Err(Error::EmptyInput(_))));
}
