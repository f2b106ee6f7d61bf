use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use spotish::api::{build_client, HttpBlobFetcher, SpotifyApi};
use spotish::{Mirror, MirrorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotish")]
#[command(about = "Download saved tracks on Spotify", long_about = None)]
struct Cli {
    /// Spotify access token with user-library-read scope
    #[arg(short, long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Output directory
    #[arg(short, long, default_value = "tracks")]
    output: PathBuf,

    /// Download album image
    #[arg(long)]
    album_image: bool,

    /// Download track preview
    #[arg(long)]
    track_preview: bool,

    /// Items requested per page
    #[arg(long, default_value_t = 20)]
    page_size: u32,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug mode (dump every raw page)
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose mode (log every file written)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose || cli.debug { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = MirrorConfig {
        output_root: cli.output,
        page_size: cli.page_size,
        download_parent_asset: cli.album_image,
        download_child_asset: cli.track_preview,
        verbose_logging: cli.verbose,
        debug_dump_raw: cli.debug,
    };

    let client = build_client(cli.timeout.map(Duration::from_secs))?;
    let source = SpotifyApi::new(client.clone(), cli.token)?;
    let mirror = Mirror::new(source, HttpBlobFetcher::new(client), config)?;

    let report = mirror.run().await?;
    println!(
        "Saved {} albums and {} tracks to {}",
        report.albums_written,
        report.tracks_written,
        mirror.config().output_root.display()
    );

    Ok(())
}
