//! FitNexus - gym member, trainer and review management.
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitnexus::cli::{self, Cli};
use fitnexus::storage::config::{get_config_path, get_data_dir, load_config_from, save_config_to};
use fitnexus::storage::open_store;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let first_run = !config_path.exists();
    let loaded =
        load_config_from(&config_path, get_data_dir()).context("Failed to load configuration")?;

    let mut config = loaded.clone();
    if let Some(seed_mode) = args.seed_mode {
        config.storage.seed_mode = seed_mode;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if first_run {
        match save_config_to(&loaded, &config_path) {
            Ok(()) => tracing::info!("Wrote default config to {}", config_path.display()),
            Err(e) => tracing::warn!("Could not write default config: {}", e),
        }
    }

    tracing::info!("Starting FitNexus v{}", env!("CARGO_PKG_VERSION"));

    let mut store = open_store(&config).context("Failed to open storage")?;
    tracing::debug!("Seed mode: {}", store.seed_mode());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(args.command, &mut store, &mut out)
}
