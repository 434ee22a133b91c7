//! Merc Collection - headless runner
//!
//! Loads a roster, optionally seeds a saved collection, applies a list of
//! store operations and prints the resulting collection as JSON.

use std::path::PathBuf;

use clap::Parser;
use merc_collection::collection::CollectionStore;
use merc_collection::command::{CommandExecutor, StoreOp};
use merc_collection::core::error::Result;
use merc_collection::core::StoreConfig;
use merc_collection::roster::loader::{load_collection_file, load_roster};
use tracing_subscriber::EnvFilter;

/// Apply collection operations to a roster and print the result
#[derive(Parser, Debug)]
#[command(name = "merc_collection")]
#[command(about = "Track mercenary collection progress from the command line")]
struct Args {
    /// Roster file (.toml/.json) or directory of per-mercenary files
    #[arg(long)]
    roster: PathBuf,

    /// Saved collection snapshot (JSON) to start from
    #[arg(long)]
    collection: Option<PathBuf>,

    /// Store config (TOML) overriding the tier ceilings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Operation to apply, in order: collect:<merc>, uncollect:<merc>,
    /// touch:<merc>, ability+:<merc>:<ability>, ability-:<merc>:<ability>,
    /// item+:<merc>:<item>, item-:<merc>:<item>
    #[arg(long = "op")]
    ops: Vec<StoreOp>,

    /// Stop at the first failing operation instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("merc_collection=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = StoreConfig::load_validated(args.config.as_deref())?;

    let mut store = CollectionStore::with_config(config);
    store.set_mercenaries(load_roster(&args.roster)?);
    if let Some(path) = &args.collection {
        store.set_collection(load_collection_file(path)?);
    }

    let report = CommandExecutor::execute_all(&mut store, &args.ops, args.strict)?;
    tracing::info!(
        applied = report.outcomes.len(),
        skipped = report.skipped.len(),
        "Operations finished"
    );

    // serde_json::Value sorts keys, giving stable output
    let snapshot = serde_json::to_value(store.collection())?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
