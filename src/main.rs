use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use floorplan2d::{init_logging, replay, SessionScript, ViewerSettings, BUILD_DATE, VERSION};
use tracing::info;

/// Replays a pointer session script through the 2D viewer and prints the
/// resulting collaborator calls as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "floorplan2d",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")")
)]
struct Args {
    /// Session script (JSON)
    script: PathBuf,

    /// Viewer settings file (TOML or JSON); defaults to the user config
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "floorplan2d starting");

    let settings = match &args.settings {
        Some(path) => ViewerSettings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ViewerSettings::load_or_default(&ViewerSettings::default_config_path()?)?,
    };

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading session script {}", args.script.display()))?;
    let script = SessionScript::from_json(&text).context("parsing session script")?;

    let outcome = replay(&script, settings.to_options())?;
    info!(calls = outcome.calls.len(), mode = %outcome.final_mode, "replay finished");

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
