use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;
use playlist_stats::{
    api::DEFAULT_PLAYLIST_ID,
    clients::{
        Catalog, FixtureCatalog, SpotifyClient,
        entities::Track,
        errors::{Error, Result},
    },
    features::build_feature_table,
    pipeline::{ConfigBuilder, Pipeline},
    stats,
};

#[derive(Parser)]
#[command(name = "playlist-stats")]
#[command(version, about = "Genre and popularity stats for a Spotify playlist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the headline statistics of a playlist
    Stats(Source),
    /// Print the feature table as JSON lines
    Features(Source),
}

#[derive(Args)]
struct Source {
    /// Playlist to analyse
    #[arg(long, default_value = DEFAULT_PLAYLIST_ID)]
    playlist_id: String,
    /// Read the catalog from a JSON snapshot instead of Spotify
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Artist lookups in flight at once
    #[arg(long, default_value_t = 4)]
    concurrency: usize,
}

impl Source {
    async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        match &self.fixture {
            Some(path) => self.fetch_with(FixtureCatalog::load(path).await?).await,
            None => {
                info!("Authorizing Spotify client ...");
                self.fetch_with(SpotifyClient::connect().await?).await
            }
        }
    }

    async fn fetch_with<C: Catalog>(&self, catalog: C) -> Result<Vec<Track>> {
        let config = ConfigBuilder::new().concurrency(self.concurrency).build();
        Pipeline::new(catalog, config)
            .fetch_enriched_tracks(&self.playlist_id)
            .await
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Stats(source) => print_stats(&source.fetch_tracks().await?),
        Commands::Features(source) => print_features(&source.fetch_tracks().await?),
    }
}

fn print_stats(tracks: &[Track]) -> Result<()> {
    println!("Tracks: {}", tracks.len());
    if tracks.is_empty() {
        return Ok(());
    }

    let track = stats::most_popular_track(tracks)?;
    println!("Most popular track: {} ({})", track.name, track.popularity);
    let (min, max) = stats::popularity_range(tracks)?;
    println!("Popularity range: {min} - {max}");
    match stats::artist_with_most_tracks(tracks) {
        Ok((artist, count)) => println!("{} appears on {count} tracks", artist.name),
        Err(Error::EmptyInput(reason)) => println!("No artist stats: {reason}"),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn print_features(tracks: &[Track]) -> Result<()> {
    for row in build_feature_table(tracks) {
        let mut value = serde_json::to_value(&row)?;
        value["duration_min"] = row.duration_min().into();
        println!("{value}");
    }
    Ok(())
}
