use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use view_core::{load_subset_config, stream_check};
use view_schema::WorldMap;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check that a player's map is a subset of the master map", long_about = None)]
struct Args {
    /// Master map JSON
    master: PathBuf,

    /// Player view JSON to check against the master
    view: PathBuf,

    /// Subset config JSON (defaults to $SUBSET_CONFIG_PATH, then the builtin copy)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compare tiles on the calling thread only
    #[arg(long)]
    sequential: bool,
}

fn load_map(path: &Path) -> Result<WorldMap> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map at {}", path.display()))?;
    WorldMap::from_json_str(&json)
        .with_context(|| format!("Failed to load map at {}", path.display()))
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let master = load_map(&args.master)?;
    let view = load_map(&args.view)?;
    let (config, _) = load_subset_config(args.config.as_deref());
    let config = if args.sequential {
        config.sequential()
    } else {
        (*config).clone()
    };

    let (subset, printed) = stream_check(&master, &view, &config, &mut io::stdout())
        .context("Failed to write diagnostics")?;

    tracing::info!(
        target: "world_views::cli",
        master = %args.master.display(),
        view = %args.view.display(),
        subset,
        problems = printed,
        "map_check.finished"
    );
    Ok(if subset {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
