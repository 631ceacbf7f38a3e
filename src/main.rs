use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use picsift::application::{ServerConfig, serve};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about = "Swipe-to-curate backend for an Immich photo library", long_about = None)]
struct Cli {
    #[arg(long, env = "PICSIFT_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    bind_address: SocketAddr,

    /// Base URL of the photo service, e.g. https://photos.example.com
    #[arg(long, env = "PICSIFT_IMMICH_URL")]
    immich_url: String,

    /// Static API key sent as the x-api-key header on every upstream call
    #[arg(long, env = "PICSIFT_IMMICH_API_KEY")]
    immich_api_key: String,

    /// Album that superliked assets are added to
    #[arg(long, env = "PICSIFT_SUPERLIKE_ALBUM_ID")]
    superlike_album_id: Option<String>,

    /// Enrich /api/random responses with capture time and location metadata
    #[arg(long, env = "PICSIFT_ENRICH_RANDOM")]
    enrich_random: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let config = ServerConfig {
        bind_address: cli.bind_address,
        immich_url: cli.immich_url,
        immich_api_key: cli.immich_api_key,
        superlike_album_id: cli.superlike_album_id,
        enrich_random: cli.enrich_random,
    };

    serve(config).await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
