use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cityguide::api::{AppState, Pages};
use cityguide::{CityGuide, CityGuideConfig, OpenAiClient, telemetry, web};

/// City guide web server
#[derive(Debug, Parser)]
#[command(name = "cityguide", version, about = "Landmarks and activities for any city")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CityGuideConfig::load_from_path(args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate()?;

    telemetry::init(&config.logging)?;
    tracing::debug!(?config.server, model = %config.completion.model, "Configuration loaded");

    let client = OpenAiClient::from_config(&config.completion)
        .with_context(|| "Failed to create completion client")?;
    let guide = CityGuide::new(Arc::new(client), config.completion.model.clone());
    let pages = Pages::new().with_context(|| "Failed to load page templates")?;

    let app = web::app(AppState::new(guide, pages), &config.server.static_dir);
    let result = web::run(&config.server, app).await;

    telemetry::shutdown();
    result
}
