//! Command line entry point: load one plugin's localization bundles.

use anyhow::{Context, Result};
use clap::Parser;
use plugkit_common::init_logging;
use plugkit_config::{ConfigCache, ConfigLoader};
use plugkit_i18n::Localization;
use plugkit_loader::{LoadOptions, LoaderContext, PluginLocalizationLoader, PluginPaths, ResourceLoader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "plugkit-loader",
    about = "Load a plugin's localization bundles into the localization registry",
    version
)]
struct Cli {
    /// Plugin identifier
    #[arg(short, long)]
    plugin: String,

    /// Site the bundles apply to (default: all sites)
    #[arg(short, long)]
    site: Option<String>,

    /// Settings file (default: $PLUGKIT_CONFIG_PATH, then ./plugkit.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dry run - parse the bundles without registering them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Log filter, overrides the configured level and RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_loader = cli.config.map_or_else(ConfigLoader::discover, ConfigLoader::new);
    let config = config_loader
        .load()
        .context("Failed to load configuration")?;
    let mut logging = config.logging.to_logging_config();
    if let Some(level) = cli.log_level {
        logging.level = level;
        logging.prefer_env = false;
    }

    init_logging(&logging)?;
    Localization::global()
        .set_supported_locales(&config.localization.supported_locales)
        .context("Invalid supported locale in configuration")?;

    let paths = Arc::new(PluginPaths::new(Arc::new(ConfigCache::new(config))));
    let loader = PluginLocalizationLoader::new(LoaderContext::new(cli.plugin, cli.site), paths);
    info!(
        "Loading localizations from {:?}",
        loader.get_base_resource_path()
    );

    let report = loader
        .load(LoadOptions {
            register: !cli.dry_run,
        })
        .await?;

    for item in &report.loaded {
        println!(
            "{}\t{} keys\t{}",
            item.name,
            item.resource.len(),
            item.path.display()
        );
    }
    for failure in &report.failures {
        eprintln!("failed\t{}\t{}", failure.path.display(), failure.error);
    }

    if !cli.dry_run {
        let registered = Localization::global().registered_locales(&loader.registration_options());
        println!("registered locales: {}", registered.join(", "));
    }

    Ok(())
}
