use std::sync::Arc;

use log::info;
use playlist_stats::{api, clients::SpotifyClient, pipeline};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let addr = std::env::var("PLAYLIST_STATS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());

    info!("Authorizing Spotify client ...");
    let spotify = SpotifyClient::connect().await?;
    let config = pipeline::ConfigBuilder::new().build();
    let app = api::router(Arc::new(pipeline::Pipeline::new(spotify, config)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving playlist stats on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
