use clap::Parser;
use tracing::{info, warn};

use cafe_shared::config::AppConfig;
use cafe_shared::telemetry::{init_telemetry, LogFormat};

mod app;
mod cli;
mod commands;
mod render;

use app::App;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_telemetry(LogFormat::from_env())?;

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }
    info!("Using API at {} ({})", config.api.base_url, config.app.env);

    let app = App::build(config, cli.json)?;

    // Continue signed out when the session cannot be read
    if let Err(e) = app.auth.restore() {
        warn!("Could not restore session from {}: {}", app.config.session.path.display(), e);
    }

    commands::run(&app, cli.command).await
}
