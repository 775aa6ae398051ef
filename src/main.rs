use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::DateTime;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use mc_version_catalog::catalog::store::CatalogStore;
use mc_version_catalog::catalog::{VersionCatalog, VersionCatalogBuilder, VersionEntry, VersionKind};
use mc_version_catalog::config::{CatalogConfig, config_path, log_path, snapshot_path};
use mc_version_catalog::logging;

#[derive(Parser)]
#[command(name = "mc-versions")]
#[command(version, about = "List Minecraft versions from the legacy Mojang listings")]
struct Cli {
    /// Configuration file (defaults to the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the saved catalog without contacting any server
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known versions, newest first
    List {
        /// Only list versions of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Only list versions from the nostalgia feed
        #[arg(long, conflicts_with = "kind")]
        legacy: bool,
    },
    /// Show details of one version
    Show { identifier: String },
    /// Show the current stable version
    Stable,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    CurrentStable,
    Stable,
    Snapshot,
    OldSnapshot,
    Legacy,
}

impl From<KindArg> for VersionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::CurrentStable => VersionKind::CurrentStable,
            KindArg::Stable => VersionKind::Stable,
            KindArg::Snapshot => VersionKind::Snapshot,
            KindArg::OldSnapshot => VersionKind::OldSnapshot,
            KindArg::Legacy => VersionKind::LegacyAlias,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&log_path())?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(config_path);
    let config = CatalogConfig::load(&config_path)
        .with_context(|| format!("failed to read configuration {:?}", config_path))?;
    let store = CatalogStore::new(snapshot_path());

    let catalog = load_catalog(&config, &store, cli.offline).await?;

    match cli.command {
        Command::List { kind, legacy } => {
            for entry in list_entries(&catalog, kind, legacy) {
                println!("{}", format_row(entry));
            }
        }
        Command::Show { identifier } => {
            let Some(entry) = catalog.find_by_identifier(&identifier) else {
                bail!("unknown version {}", identifier);
            };
            print_details(entry);
        }
        Command::Stable => {
            let Some(entry) = catalog.current_stable() else {
                bail!("no current stable version is known");
            };
            print_details(entry);
        }
    }

    Ok(())
}

/// Refresh the saved catalog from the network, falling back to the saved
/// parts that could not be refreshed.
async fn load_catalog(
    config: &CatalogConfig,
    store: &CatalogStore,
    offline: bool,
) -> anyhow::Result<VersionCatalog> {
    let saved = store
        .load()
        .inspect_err(|e| warn!("Ignoring saved catalog {:?}: {}", store.path(), e))
        .ok()
        .flatten();

    if offline {
        return saved.context("no saved catalog yet, run once without --offline");
    }

    let builder = VersionCatalogBuilder::from_config(config)?;
    let mut catalog = saved.unwrap_or_default();

    match builder.reload(&mut catalog).await {
        Ok(()) => {
            if let Err(e) = store.save(&catalog) {
                warn!("Failed to save catalog: {}", e);
            }
        }
        Err(e) if catalog.needs_main_load() => {
            return Err(e).context("failed to load the version list");
        }
        Err(e) => {
            eprintln!("warning: {}; showing saved versions", e);
        }
    }

    Ok(catalog)
}

fn list_entries(catalog: &VersionCatalog, kind: Option<KindArg>, legacy: bool) -> Vec<&VersionEntry> {
    match kind {
        _ if legacy => catalog.legacy().iter().collect(),
        Some(kind) => catalog.entries_of_kind(kind.into()).collect(),
        None => catalog.iter().collect(),
    }
}

fn format_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) if timestamp > 0 => date.format("%Y-%m-%d %H:%M").to_string(),
        _ => "-".to_string(),
    }
}

fn format_row(entry: &VersionEntry) -> String {
    format!(
        "{} {:<20} {:<15} {}",
        if entry.is_current() { '*' } else { ' ' },
        entry.display_name(),
        entry.kind().as_str(),
        format_date(entry.timestamp())
    )
}

fn print_details(entry: &VersionEntry) {
    println!("id:        {}", entry.identifier());
    println!("name:      {}", entry.display_name());
    println!("kind:      {}", entry.kind());
    println!("released:  {}", format_date(entry.timestamp()));
    println!("download:  {}", entry.download_url());
    if !entry.etag().is_empty() {
        println!("etag:      {}", entry.etag());
    }
    if let Some(legacy_id) = entry.legacy_id() {
        println!("feed name: {}", legacy_id);
    }
}
