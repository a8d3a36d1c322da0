mod app;
mod keyboard;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod toast;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use popcorn_api::OmdbClient;
use popcorn_core::config::{AppConfig, API_KEY_ENV};
use tracing_subscriber::EnvFilter;

/// Search movies, rate them, and keep a watched list for the session.
#[derive(Debug, Parser)]
#[command(name = "popcorn", version)]
struct Cli {
    /// OMDb API key. Overrides the config file and the environment.
    #[arg(long)]
    api_key: Option<String>,

    /// Query to search for at startup.
    #[arg(long)]
    query: Option<String>,

    /// Read config from this file instead of the platform config dir.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popcorn=debug")),
        )
        .init();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        AppConfig::default()
    });

    let api_key = cli.api_key.clone().or_else(|| config.api_key()).unwrap_or_else(|| {
        tracing::warn!("no OMDb API key configured; set {API_KEY_ENV} or pass --api-key");
        String::new()
    });

    let client = match OmdbClient::with_base_url(api_key.clone(), &config.omdb.base_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, base_url = %config.omdb.base_url, "using default OMDb URL");
            OmdbClient::new(api_key)
        }
    };

    let initial_query = cli
        .query
        .clone()
        .unwrap_or_else(|| config.search.initial_query.clone());

    tracing::info!(base_url = %client.base_url(), "starting popcorn");

    iced::application(
        move || app::Popcorn::new(config.clone(), client.clone(), initial_query.clone()),
        app::Popcorn::update,
        app::Popcorn::view,
    )
    .title(app::Popcorn::title)
    .subscription(app::Popcorn::subscription)
    .theme(app::Popcorn::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window_size((1100.0, 760.0))
    .run()
}
